//! Fixed sample catalog loaded at startup

use super::MemoryStore;
use chrono::{DateTime, TimeZone, Utc};
use plantguard_core::{
    disease_type, DiseaseSeverity, NewDiseaseOutbreak, NewNewsArticle, NewPlantDisease,
    NewPreventionMethod, NewTreatment, OutbreakStatus, TreatmentType,
};

fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("seed dates are valid calendar dates")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn populate(store: &MemoryStore) {
    let powdery_mildew = store.insert_disease(NewPlantDisease {
        name: "Powdery Mildew".to_string(),
        disease_type: disease_type::FUNGAL.to_string(),
        severity: DiseaseSeverity::Moderate,
        description: "A fungal disease that affects a wide range of plants including vegetables, ornamentals, and fruits.".to_string(),
        symptoms: "White powdery spots that eventually spread to cover the leaf surface. Severely infected leaves may turn yellow and drop.".to_string(),
        images: strings(&["https://images.unsplash.com/photo-1523348837708-15d4a09cfac2"]),
        affected_plants: strings(&[
            "Cucumbers", "Squash", "Roses", "Grapes", "Apples", "Melons", "Zinnias",
        ]),
    });

    let black_spot = store.insert_disease(NewPlantDisease {
        name: "Black Spot".to_string(),
        disease_type: disease_type::FUNGAL.to_string(),
        severity: DiseaseSeverity::Moderate,
        description: "A common fungal disease that primarily affects roses and other ornamentals.".to_string(),
        symptoms: "Circular black spots with fringed margins forming on upper leaf surfaces. Infected leaves may yellow and drop prematurely.".to_string(),
        images: strings(&["https://images.unsplash.com/photo-1598512219780-fe7116237768"]),
        affected_plants: strings(&["Roses", "Other ornamentals"]),
    });

    let late_blight = store.insert_disease(NewPlantDisease {
        name: "Late Blight".to_string(),
        disease_type: disease_type::FUNGAL.to_string(),
        severity: DiseaseSeverity::Severe,
        description: "A serious fungal disease that can destroy entire crops rapidly, especially in wet conditions.".to_string(),
        symptoms: "Water-soaked spots on leaves that quickly turn brown. White mold may appear under moist conditions. Can destroy plants rapidly.".to_string(),
        images: strings(&["https://images.unsplash.com/photo-1624768911018-9cafe157053e"]),
        affected_plants: strings(&["Tomatoes", "Potatoes"]),
    });

    let outbreaks = [
        (late_blight.id, "Northeast Region", "42.36", "-71.05", (2023, 5, 28), 15),
        (powdery_mildew.id, "Western Region", "37.77", "-122.41", (2023, 6, 5), 8),
        (black_spot.id, "Southern Region", "29.76", "-95.36", (2023, 6, 1), 12),
    ];
    for (disease_id, region, latitude, longitude, (y, m, d), report_count) in outbreaks {
        store.insert_outbreak(NewDiseaseOutbreak {
            disease_id,
            region: region.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            detected_date: utc_date(y, m, d),
            report_count,
            status: OutbreakStatus::Active,
        });
    }

    let treatments = [
        (
            "Baking Soda Solution",
            TreatmentType::Organic,
            "An effective organic solution for controlling powdery mildew",
            "Mix 1 tablespoon baking soda with 1 gallon of water and a few drops of liquid soap. Spray on affected plants weekly.",
        ),
        (
            "Milk Spray",
            TreatmentType::Organic,
            "Milk contains compounds that can help fight powdery mildew",
            "Diluted milk spray (1 part milk to 9 parts water) applied weekly.",
        ),
        (
            "Neem Oil",
            TreatmentType::Organic,
            "A natural fungicide and insecticide",
            "Neem oil solution following product instructions.",
        ),
        (
            "Sulfur-based Fungicide",
            TreatmentType::Chemical,
            "Chemical fungicide effective against powdery mildew",
            "Apply sulfur-based fungicide as directed on product labels, typically at first sign of disease.",
        ),
    ];
    for (name, treatment_type, description, instructions) in treatments {
        store.insert_treatment(NewTreatment {
            disease_id: powdery_mildew.id,
            name: name.to_string(),
            treatment_type,
            description: description.to_string(),
            instructions: instructions.to_string(),
        });
    }

    let preventions = [
        (
            "Improve Air Circulation",
            "Space plants properly and prune to increase airflow around leaves and stems.",
            "wind",
        ),
        (
            "Avoid Overhead Watering",
            "Water at the base of plants early in the day to minimize leaf wetness.",
            "tint-slash",
        ),
        (
            "Sunlight Exposure",
            "Plant in areas with adequate sunlight as shade can promote fungal growth.",
            "sun",
        ),
        (
            "Resistant Varieties",
            "Choose plant varieties that have been bred for resistance to powdery mildew.",
            "seedling",
        ),
        (
            "Sanitation",
            "Remove and destroy infected plant parts. Don't compost infected material.",
            "broom",
        ),
        (
            "Preventative Spraying",
            "Apply preventative treatments before disease appears in susceptible plants.",
            "calendar-alt",
        ),
    ];
    for (name, description, icon) in preventions {
        store.insert_prevention_method(NewPreventionMethod {
            disease_id: powdery_mildew.id,
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        });
    }

    for article in news_articles() {
        store.insert_news_article(article);
    }
}

fn news_articles() -> Vec<NewNewsArticle> {
    vec![
        NewNewsArticle {
            title: "Breakthrough in Fighting Tomato Blight".to_string(),
            description: "Scientists have discovered a new organic compound that effectively prevents tomato blight without harmful chemicals...".to_string(),
            content: "Scientists at the University of Agriculture have discovered a new organic compound derived from plant extracts that has shown remarkable efficacy in preventing tomato blight. In field trials, plants treated with the compound showed 90% less infection compared to untreated plants, even under high-pressure disease conditions.\n\n\
                The compound, named 'NaturalShield-TB', works by strengthening the plant's natural immune responses rather than directly attacking the pathogen. This approach is considered more sustainable as it reduces the likelihood of pathogen resistance developing over time.\n\n\
                'This is a game-changer for organic tomato growers,' says Dr. Elena Martinez, lead researcher on the project. 'The compound is completely non-toxic to beneficial insects, leaves no harmful residues, and can be produced at scale from renewable plant sources.'".to_string(),
            image: "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc".to_string(),
            category: "New Research".to_string(),
            published_date: utc_date(2023, 6, 15),
        },
        NewNewsArticle {
            title: "New Citrus Disease Spreading in Western Regions".to_string(),
            description: "Agricultural authorities are warning about a new citrus disease that has been detected in several western states...".to_string(),
            content: "Agricultural authorities are issuing an urgent alert about a new citrus disease that has been detected in several western states. The disease, identified as Citrus Chlorotic Mottle Virus (CCMV), causes yellowing of leaves, stunted growth, and eventually leads to severely reduced fruit production.\n\n\
                First detected in California last month, the disease has now been confirmed in orchards across three additional states. Early reports suggest it is spread primarily by the Asian citrus psyllid, an insect that has become increasingly common in the region.\n\n\
                'We're asking all citrus growers and even homeowners with citrus trees to inspect their plants regularly,' says Mark Johnson, spokesperson for the Regional Agricultural Authority. 'Early detection is crucial for containing this outbreak. If you see symptoms, please report them immediately to your local agricultural extension office.'".to_string(),
            image: "https://images.unsplash.com/photo-1523348837708-15d4a09cfac2".to_string(),
            category: "Alert".to_string(),
            published_date: utc_date(2023, 6, 10),
        },
        NewNewsArticle {
            title: "5 Common Garden Diseases and How to Prevent Them".to_string(),
            description: "Learn how to identify and prevent the most common plant diseases that can devastate your garden this season...".to_string(),
            content: "As the growing season gets into full swing, gardeners should be on the lookout for common plant diseases that can quickly spread and damage plants. Here are five of the most common garden diseases and proven prevention strategies:\n\n\
                1. Powdery Mildew: This fungal disease appears as white powdery spots on leaves. Prevent it by ensuring good air circulation, avoiding overhead watering, and applying preventative treatments like diluted milk spray.\n\n\
                2. Black Spot: Common on roses, this fungus creates black spots with yellowing around them. Remove infected leaves, ensure proper spacing, and consider resistant varieties.\n\n\
                3. Late Blight: This devastating disease affects tomatoes and potatoes. Prevent by using certified disease-free seed potatoes and tomato plants, practicing crop rotation, and keeping foliage dry.\n\n\
                4. Downy Mildew: Often confused with powdery mildew, it appears as yellow spots on upper leaf surfaces with gray fuzz underneath. Good air circulation and morning watering help prevent it.\n\n\
                5. Bacterial Leaf Spot: Causing water-soaked spots that turn brown with yellow halos. Avoid working with wet plants and disinfect garden tools regularly to prevent spread.".to_string(),
            image: "https://images.unsplash.com/photo-1598512199776-e0aa5163481a".to_string(),
            category: "Tips".to_string(),
            published_date: utc_date(2023, 6, 5),
        },
    ]
}
