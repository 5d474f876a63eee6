//! Static company data the site starts from.
//!
//! Every process begins with this catalog; admin edits are kept in memory
//! only and vanish on restart.

use indexmap::IndexMap;

use crate::model::{
    BlogPost, NavLink, Product, Service, ServiceIcon, SocialLinks, Stat, TeamMember, Testimonial,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn specs(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// Main navigation, in display order.
#[must_use]
pub fn nav_links() -> Vec<NavLink> {
    [
        ("Home", "/"),
        ("About Us", "/about"),
        ("Products", "/products"),
        ("Services", "/services"),
        ("Blog", "/blog"),
        ("Contact", "/contact"),
    ]
    .into_iter()
    .map(|(name, path)| NavLink {
        name: name.to_owned(),
        path: path.to_owned(),
    })
    .collect()
}

/// Headline figures for the home page.
#[must_use]
pub fn stats() -> Vec<Stat> {
    [
        ("10+", "Years of Experience"),
        ("200+", "Machines Delivered"),
        ("50+", "Happy Clients"),
        ("NBTI Partner", "Certified Quality"),
    ]
    .into_iter()
    .map(|(value, label)| Stat {
        value: value.to_owned(),
        label: label.to_owned(),
    })
    .collect()
}

#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            slug: "stainless-steel-honey-processor".to_owned(),
            name: "Stainless Steel Honey Processor".to_owned(),
            description: "A high-grade stainless steel processing unit designed for efficient honey extraction, filtration, and processing. Built for durability and hygiene, suitable for small to large scale apiaries.".to_owned(),
            image_url: "https://picsum.photos/seed/honey-processor/800/600".to_owned(),
            gallery: strings(&[
                "https://picsum.photos/seed/stainless-tank/800/600",
                "https://picsum.photos/seed/food-machine/800/600",
                "https://picsum.photos/seed/processor-detail/800/600",
            ]),
            category: "Stainless Steel Equipment".to_owned(),
            applications: strings(&["Food Processing", "Apiculture", "Commercial Honey Production"]),
            materials: strings(&["304 Stainless Steel", "Food-Grade Seals"]),
            specifications: specs(&[
                ("Capacity", "100 Liters/Batch"),
                ("Power", "2.2 kW, 220V/50Hz"),
                ("Dimensions (LxWxH)", "1200 x 800 x 1500 mm"),
                ("Weight", "150 kg"),
            ]),
            spec_sheet_url: "/docs/honey-processor-spec-sheet.pdf".to_owned(),
            views: Some(125),
        },
        Product {
            id: 2,
            slug: "multi-crop-thresher".to_owned(),
            name: "Multi-Crop Thresher".to_owned(),
            description: "An efficient and robust machine for threshing a variety of crops including maize, millet, sorghum, and beans. Designed for high output and minimal grain loss, increasing post-harvest productivity.".to_owned(),
            image_url: "https://picsum.photos/seed/thresher/800/600".to_owned(),
            gallery: strings(&[
                "https://picsum.photos/seed/farm-machinery/800/600",
                "https://picsum.photos/seed/thresher-action/800/600",
                "https://picsum.photos/seed/welded-frame/800/600",
            ]),
            category: "Agro-Allied Machinery".to_owned(),
            applications: strings(&["Farming Cooperatives", "Large-Scale Farms", "Post-Harvest Processing"]),
            materials: strings(&["Mild Steel Frame", "High-Carbon Steel Components"]),
            specifications: specs(&[
                ("Throughput", "500-800 kg/hour (Maize)"),
                ("Power Source", "15 HP Petrol Engine or Electric Motor"),
                ("Weight", "250 kg"),
                ("Crops", "Maize, Millet, Sorghum, Beans"),
            ]),
            spec_sheet_url: "/docs/multi-crop-thresher-spec-sheet.pdf".to_owned(),
            views: Some(250),
        },
        Product {
            id: 3,
            slug: "animal-feed-mill".to_owned(),
            name: "Animal Feed Mill / Fish Feed Mill".to_owned(),
            description: "A complete feed mill system for producing high-quality pellets for poultry, livestock, and aquaculture. Includes grinding, mixing, and pelletizing units, tailored to your production needs.".to_owned(),
            image_url: "https://picsum.photos/seed/feed-mill/800/600".to_owned(),
            gallery: strings(&[
                "https://picsum.photos/seed/pellet-machine/800/600",
                "https://picsum.photos/seed/fish-farm/800/600",
                "https://picsum.photos/seed/feed-production/800/600",
            ]),
            category: "Agro-Allied Machinery".to_owned(),
            applications: strings(&["Poultry Farming", "Aquaculture", "Livestock Management", "Commercial Feed Production"]),
            materials: strings(&["Structural Steel", "Stainless Steel Contact Parts"]),
            specifications: specs(&[
                ("Capacity", "250 kg/hour"),
                ("Motor Power", "10 kW (Mixer), 15 kW (Pelletizer)"),
                ("Pellet Size", "2mm - 8mm (Customizable)"),
                ("System", "Grinder, Mixer, Pelletizer"),
            ]),
            spec_sheet_url: "/docs/animal-feed-mill-spec-sheet.pdf".to_owned(),
            views: Some(480),
        },
        Product {
            id: 4,
            slug: "industrial-water-boiler".to_owned(),
            name: "Industrial Water Boiler".to_owned(),
            description: "High-efficiency industrial boilers for generating hot water or steam for various industrial processes. Built for safety, reliability, and optimal fuel consumption.".to_owned(),
            image_url: "https://picsum.photos/seed/industrial-boiler/800/600".to_owned(),
            gallery: strings(&[
                "https://picsum.photos/seed/pressure-vessel/800/600",
                "https://picsum.photos/seed/pipe-system/800/600",
                "https://picsum.photos/seed/factory-floor/800/600",
            ]),
            category: "Industrial Equipment".to_owned(),
            applications: strings(&["Textile Industry", "Food & Beverage", "Pharmaceuticals", "Laundries"]),
            materials: strings(&["Boiler Steel", "Carbon Steel", "Refractory Materials"]),
            specifications: specs(&[
                ("Capacity", "500 L to 5000 L"),
                ("Working Pressure", "Up to 10 Bar"),
                ("Fuel Type", "Diesel, Gas, Firewood"),
                ("Efficiency", "> 85%"),
            ]),
            spec_sheet_url: "/docs/industrial-boiler-spec-sheet.pdf".to_owned(),
            views: Some(95),
        },
        Product {
            id: 5,
            slug: "vegetable-dryer".to_owned(),
            name: "Vegetable Dryer".to_owned(),
            description: "A multi-purpose dehydration machine for drying vegetables, fruits, herbs, and fish. Ensures uniform drying while preserving nutrients and flavour, ideal for value addition and preservation.".to_owned(),
            image_url: "https://picsum.photos/seed/veg-dryer/800/600".to_owned(),
            gallery: strings(&[
                "https://picsum.photos/seed/drying-racks/800/600",
                "https://picsum.photos/seed/food-dehydrator/800/600",
                "https://picsum.photos/seed/control-panel/800/600",
            ]),
            category: "Agro-Allied Machinery".to_owned(),
            applications: strings(&["Food Processing", "Agro-business", "Herbal Medicine"]),
            materials: strings(&["Stainless Steel (Food Grade)", "Insulated Panels"]),
            specifications: specs(&[
                ("Tray Count", "20-100 Trays"),
                ("Temperature Range", "40°C - 90°C"),
                ("Power", "3 kW - 15 kW"),
                ("Control", "Digital Thermostat Control"),
            ]),
            spec_sheet_url: "/docs/vegetable-dryer-spec-sheet.pdf".to_owned(),
            views: Some(310),
        },
        Product {
            id: 6,
            slug: "branded-cold-room".to_owned(),
            name: "Branded Cold Room & Chiller".to_owned(),
            description: "Custom-built cold rooms and chillers for commercial and industrial use. We design and install reliable refrigeration systems for preserving perishables like produce, meat, and pharmaceuticals.".to_owned(),
            image_url: "https://picsum.photos/seed/cold-room/800/600".to_owned(),
            gallery: strings(&[
                "https://picsum.photos/seed/chiller-unit/800/600",
                "https://picsum.photos/seed/cold-storage/800/600",
                "https://picsum.photos/seed/insulated-panel/800/600",
            ]),
            category: "Industrial Equipment".to_owned(),
            applications: strings(&["Food Storage", "Pharmaceuticals", "Logistics", "Supermarkets"]),
            materials: strings(&["Polyurethane Panels", "Stainless Steel Cladding", "Refrigeration Components"]),
            specifications: specs(&[
                ("Size", "Customizable (e.g., 10ft x 10ft x 8ft)"),
                ("Temperature Range", "-20°C to +10°C"),
                ("Compressor", "Copeland / Bitzer"),
                ("Panel Thickness", "100mm / 150mm"),
            ]),
            spec_sheet_url: "/docs/cold-room-spec-sheet.pdf".to_owned(),
            views: Some(180),
        },
    ]
}

const STAINLESS_POST_BODY: &str = r"
<p>When it comes to fabricating machinery for the food and pharmaceutical industries, material choice is not just a matter of performance. It is a matter of public health and safety. At Kamilu Welding Services, we predominantly use high-grade stainless steel, and for good reason.</p>
<h3>Hygienic and Easy to Clean</h3>
<p>Stainless steel has a non-porous surface, which means bacteria, viruses, and other microorganisms have nowhere to hide. This makes it incredibly easy to clean and sanitize, a critical requirement for preventing cross-contamination in food processing lines.</p>
<h3>Corrosion Resistance</h3>
<p>Food products, cleaning agents, and environmental factors can be highly corrosive. Stainless steel, particularly grades like 304 and 316, contains chromium, which forms a passive, protective layer that resists rust and corrosion, ensuring the longevity of the equipment and the purity of the product.</p>
<h3>Durability and Strength</h3>
<p>Industrial machinery operates under demanding conditions. Stainless steel offers excellent strength, toughness, and temperature resistance, ensuring that equipment like our honey processors and industrial fryers can withstand the rigors of daily production for years to come.</p>
";

#[must_use]
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            slug: "stainless-steel-in-food-processing".to_owned(),
            title: "Why Stainless Steel is Essential for Food Processing Machinery".to_owned(),
            excerpt: "Explore the critical role of stainless steel in ensuring hygiene, durability, and compliance in the food and beverage industry. Learn why it's our material of choice.".to_owned(),
            content: STAINLESS_POST_BODY.trim().to_owned(),
            image_url: "https://picsum.photos/seed/stainless-steel-food/800/600".to_owned(),
            author: "Dr. Aliu Yamah".to_owned(),
            publish_date: "March 15, 2024".to_owned(),
            meta_description: "Learn why 304 and 316 stainless steel are the top materials for food processing equipment. Discover the benefits of hygiene, corrosion resistance, and durability with Kamilu Welding Services.".to_owned(),
            meta_keywords: strings(&["stainless steel", "food processing", "hygiene", "fabrication", "Kano", "Nigeria", "industrial machinery"]),
        },
        BlogPost {
            id: 2,
            slug: "innovations-in-agro-allied-machinery".to_owned(),
            title: "Boosting Agricultural Output with Modern Agro-Allied Machinery".to_owned(),
            excerpt: "Discover how modern equipment like multi-crop threshers and feed mills are revolutionizing farming in Nigeria, reducing labor, and increasing yields.".to_owned(),
            content: "<p>Detailed content about agro-allied machinery...</p>".to_owned(),
            image_url: "https://picsum.photos/seed/agro-innovation/800/600".to_owned(),
            author: "Abubakar S Abdullahi".to_owned(),
            publish_date: "February 28, 2024".to_owned(),
            meta_description: "Explore modern agro-allied machinery from Kamilu Welding Services. Our multi-crop threshers and feed mills are designed to increase agricultural productivity and efficiency in Nigeria.".to_owned(),
            meta_keywords: strings(&["agro-allied machinery", "farming", "agriculture", "multi-crop thresher", "feed mill", "Nigeria"]),
        },
        BlogPost {
            id: 3,
            slug: "our-commitment-to-youth-skills-training".to_owned(),
            title: "Beyond Fabrication: Our Commitment to Youth Skills Acquisition".to_owned(),
            excerpt: "At K.W.S., we believe in building the future. Learn about our youth training programs and our collaboration with the NBTI to empower the next generation of fabricators.".to_owned(),
            content: "<p>Detailed content about youth training...</p>".to_owned(),
            image_url: "https://picsum.photos/seed/welding-training/800/600".to_owned(),
            author: "Muhammad Hamza".to_owned(),
            publish_date: "January 10, 2024".to_owned(),
            meta_description: "Kamilu Welding Services is committed to youth empowerment through skills acquisition programs in welding and fabrication, in partnership with NBTI Kano.".to_owned(),
            meta_keywords: strings(&["youth training", "skills acquisition", "welding", "fabrication", "empowerment", "NBTI", "Kano"]),
        },
    ]
}

const PHARMA_SERVICE_BODY: &str = r"
<p>Our core expertise lies in the bespoke fabrication of machinery for demanding industrial and pharmaceutical environments. We understand that precision, hygiene, and reliability are non-negotiable. Our team works with high-grade materials like 304 and 316 stainless steel to create equipment that meets and exceeds industry regulations.</p>
<h3>Our Process Includes:</h3>
<ul>
    <li><strong>Needs Assessment:</strong> We collaborate with you to understand your exact processing requirements, throughput, and operational constraints.</li>
    <li><strong>CAD Design &amp; Modeling:</strong> We create detailed 3D models to visualize the final product and ensure perfect integration into your existing workflow.</li>
    <li><strong>Precision Fabrication:</strong> Utilizing modern tools, we cut, form, and assemble components with meticulous attention to detail.</li>
    <li><strong>Sanitary Welding:</strong> Our certified welders specialize in sanitary TIG welding, creating smooth, non-porous seams that prevent contamination and are easy to clean.</li>
    <li><strong>FAT (Factory Acceptance Testing):</strong> Before delivery, we can conduct rigorous testing at our facility to ensure the machine operates as specified.</li>
</ul>
";

const AGRO_SERVICE_BODY: &str = r"
<p>We are dedicated to mechanizing Nigeria's agricultural sector with robust, efficient, and locally-built machinery. Our solutions are designed to reduce post-harvest losses, increase processing efficiency, and add value to raw agricultural products.</p>
<h3>Equipment Showcase:</h3>
<ul>
    <li><strong>Multi-Crop Threshers:</strong> Drastically reduce the time and labor required for threshing crops like maize, sorghum, and millet.</li>
    <li><strong>Vegetable &amp; Fruit Dryers:</strong> Preserve produce and create new revenue streams with our controlled-environment dehydration systems.</li>
    <li><strong>Complete Feed Mills:</strong> We design and install end-to-end systems for producing high-quality animal and fish feed, from grinding and mixing to pelletizing.</li>
    <li><strong>Stainless Steel Processors:</strong> For honey, juices, and other liquid food products, our hygienic processors ensure quality and safety.</li>
</ul>
<p>Our designs are tailored to the Nigerian context, prioritizing durability, ease of maintenance, and the ability to handle local crop varieties.</p>
";

const COLD_ROOM_SERVICE_BODY: &str = r"
<p>A reliable cold chain is essential for the food, pharmaceutical, and hospitality industries. We provide turnkey solutions for cold storage, from small walk-in chillers to large-scale industrial cold rooms.</p>
<h3>Our Cold Chain Services:</h3>
<ul>
    <li><strong>Custom Design:</strong> We design cold rooms based on your specific size requirements, temperature needs (-20°C to +10°C), and product type.</li>
    <li><strong>High-Quality Insulation:</strong> We use high-density Polyurethane (PUF) panels to ensure maximum thermal efficiency and reduce energy consumption.</li>
    <li><strong>Reliable Refrigeration Units:</strong> We source and install industry-leading compressors and evaporators from trusted brands like Copeland and Bitzer to guarantee consistent temperatures.</li>
    <li><strong>Professional Installation:</strong> Our experienced technicians handle the complete assembly, from paneling and flooring to refrigeration system setup and electrical work.</li>
    <li><strong>Maintenance and Support:</strong> We offer service contracts to ensure your cold room operates at peak performance year-round.</li>
</ul>
";

const TRAINING_SERVICE_BODY: &str = r"
<p>Beyond our commercial services, we are deeply committed to building human capital. Our Youth Skills Acquisition program is a cornerstone of our corporate social responsibility, aimed at tackling unemployment and bridging the skills gap in Nigeria's industrial sector.</p>
<h3>Program Highlights:</h3>
<ul>
    <li><strong>Government Partnership:</strong> We proudly collaborate with the National Board for Technology Incubation (NBTI) to deliver certified training programs.</li>
    <li><strong>Practical, Hands-On Learning:</strong> Trainees work on real-world projects in our fully-equipped workshop, learning by doing.</li>
    <li><strong>Comprehensive Curriculum:</strong> The program covers welding safety, different welding techniques (Arc, TIG, MIG), metal fabrication, blueprint reading, and machine operation.</li>
    <li><strong>Entrepreneurship Focus:</strong> We don't just teach technical skills; we mentor trainees on how to start and run their own small fabrication businesses.</li>
    <li><strong>Proven Success:</strong> Many of our graduates have gone on to secure jobs in the industry or launch their own successful enterprises.</li>
</ul>
";

#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            slug: "industrial-pharmaceutical-machinery".to_owned(),
            name: "Industrial & Pharmaceutical Machinery".to_owned(),
            description: "Design, fabrication, and installation of custom machinery for industrial and pharmaceutical applications, adhering to strict quality standards.".to_owned(),
            detailed_description: PHARMA_SERVICE_BODY.trim().to_owned(),
            image_url: "https://picsum.photos/seed/pharma-machinery/1200/800".to_owned(),
            features: strings(&[
                "Adherence to GMP Standards",
                "High-Grade Stainless Steel Construction",
                "Customizable to any Specification",
                "Full Documentation and Support",
                "On-site Installation and Commissioning",
            ]),
            icon: ServiceIcon::Fabrication,
        },
        Service {
            id: 2,
            slug: "agro-food-processing-solutions".to_owned(),
            name: "Agro & Food Processing Solutions".to_owned(),
            description: "We build a wide range of agro-allied equipment, from threshers and dryers to complete feed mill systems, to boost agricultural productivity.".to_owned(),
            detailed_description: AGRO_SERVICE_BODY.trim().to_owned(),
            image_url: "https://picsum.photos/seed/agro-processing/1200/800".to_owned(),
            features: strings(&[
                "Durable and Robust Construction",
                "Designed for Local Conditions",
                "High-Efficiency Operation",
                "Reduces Labor Costs",
                "Increases Product Value",
            ]),
            icon: ServiceIcon::Structural,
        },
        Service {
            id: 3,
            slug: "cold-room-chiller-construction".to_owned(),
            name: "Cold Room & Chiller Construction".to_owned(),
            description: "Complete design and installation of branded cold rooms and industrial chillers for reliable preservation of perishable goods.".to_owned(),
            detailed_description: COLD_ROOM_SERVICE_BODY.trim().to_owned(),
            image_url: "https://picsum.photos/seed/cold-chain/1200/800".to_owned(),
            features: strings(&[
                "Customizable Dimensions",
                "Wide Temperature Range",
                "Energy Efficient Design",
                "Top-Tier Refrigeration Components",
                "Full Installation & Support",
            ]),
            icon: ServiceIcon::OnSite,
        },
        Service {
            id: 4,
            slug: "youth-skills-acquisition-training".to_owned(),
            name: "Youth Skills Acquisition Training".to_owned(),
            description: "In partnership with government bodies, we provide hands-on training in welding and fabrication to empower the next generation of artisans.".to_owned(),
            detailed_description: TRAINING_SERVICE_BODY.trim().to_owned(),
            image_url: "https://picsum.photos/seed/skill-training/1200/800".to_owned(),
            features: strings(&[
                "NBTI Certified Program",
                "Real-World Workshop Experience",
                "Expert Instructors",
                "Focus on Safety and Quality",
                "Pathways to Employment and Entrepreneurship",
            ]),
            icon: ServiceIcon::Support,
        },
    ]
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "KamiluWelding delivered a complete poultry feed mill for our farm. The quality is excellent, and their after-sales support has been fantastic. Our production has doubled.",
            "Aisha Bello",
            "CEO, Bello Farms Ltd.",
        ),
        (
            "The stainless steel grinding machine they fabricated for our spice company is a workhorse. It meets all hygiene standards and has been running flawlessly since installation.",
            "David Okon",
            "Production Manager, SpiceMasters NG",
        ),
        (
            "We contracted K.W.S. to build a custom industrial fryer. They understood our needs perfectly and delivered a high-quality, efficient machine on schedule.",
            "Mr. Emeka Eze",
            "Owner, Eze Foods",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((quote, author, company), id)| Testimonial {
        id,
        quote: quote.to_owned(),
        author: author.to_owned(),
        company: company.to_owned(),
    })
    .collect()
}

#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    [
        ("Dr. Aliu Yamah", "Founder & Chief Engineer", "engineer"),
        ("Muhammad Hamza", "Managing Director", "manager"),
        ("Abubakar S Abdullahi", "Head of Operations", "operations"),
        ("Usman Abdullahi", "Lead Fabricator", "fabricator"),
    ]
    .into_iter()
    .map(|(name, role, photo)| TeamMember {
        name: name.to_owned(),
        role: role.to_owned(),
        image_url: format!("https://picsum.photos/seed/{photo}/300/300"),
        socials: SocialLinks {
            linkedin: "https://linkedin.com".to_owned(),
            twitter: "https://twitter.com".to_owned(),
        },
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seeded_ids_and_slugs_are_unique() {
        let products = products();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(slugs.len(), products.len());

        let posts = blog_posts();
        let ids: HashSet<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn seed_sizes_match_the_company_catalog() {
        assert_eq!(products().len(), 6);
        assert_eq!(blog_posts().len(), 3);
        assert_eq!(services().len(), 4);
        assert_eq!(testimonials().len(), 3);
        assert_eq!(team_members().len(), 4);
        assert_eq!(nav_links().len(), 6);
        assert_eq!(stats().len(), 4);
    }

    #[test]
    fn testimonial_ids_start_at_one() {
        let ids: Vec<_> = testimonials().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
