//! Compiled-in sample destinations.

use super::city::{City, ImageRef};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn photos(items: &[&str]) -> Vec<ImageRef> {
    items.iter().map(|item| ImageRef::new(*item)).collect()
}

pub(super) fn sample_cities() -> Vec<City> {
    vec![
        City {
            id: "barcelona".to_string(),
            name: "Barcelona".to_string(),
            country: "Spain".to_string(),
            description: "A vibrant Mediterranean city known for Gaudí's unique \
                          architecture, great food and a rich Catalan culture."
                .to_string(),
            best_time: "May - September".to_string(),
            hours: "City open 24/7, attraction hours vary".to_string(),
            highlights: strings(&[
                "Sagrada Família",
                "Park Güell",
                "Las Ramblas",
                "Gothic Quarter",
                "Camp Nou",
            ]),
            photos: photos(&[
                "barcelona/sagrada-familia.jpg",
                "barcelona/park-guell.jpg",
                "barcelona/las-ramblas.jpg",
            ]),
            video_url: "https://www.youtube.com/results?search_query=barcelona+travel+guide"
                .to_string(),
            web_url: "https://www.barcelonaturisme.com".to_string(),
        },
        City {
            id: "paris".to_string(),
            name: "Paris".to_string(),
            country: "France".to_string(),
            description: "The city of light: the Eiffel Tower, the Louvre and walks \
                          along the Seine."
                .to_string(),
            best_time: "April - June / September - October".to_string(),
            hours: "Attraction hours vary".to_string(),
            highlights: strings(&["Eiffel Tower", "Louvre", "Montmartre"]),
            photos: photos(&["paris/eiffel.jpg", "paris/louvre.jpg"]),
            video_url: "https://www.youtube.com/results?search_query=paris+travel+guide"
                .to_string(),
            web_url: "https://parisjetaime.com".to_string(),
        },
        City {
            id: "roma".to_string(),
            name: "Rome".to_string(),
            country: "Italy".to_string(),
            description: "History, the Colosseum, the Vatican and excellent Italian food."
                .to_string(),
            best_time: "April - June / September - October".to_string(),
            hours: "Most attractions keep fixed hours".to_string(),
            highlights: strings(&["Colosseum", "Vatican", "Roman Forum"]),
            photos: photos(&["roma/colosseum.jpg"]),
            video_url: "https://www.youtube.com/results?search_query=rome+travel+guide"
                .to_string(),
            web_url: "https://www.turismoroma.it".to_string(),
        },
        City {
            id: "tokio".to_string(),
            name: "Tokyo".to_string(),
            country: "Japan".to_string(),
            description: "A blend of modernity and tradition: temples, technology \
                          and food."
                .to_string(),
            best_time: "March - May / October - November".to_string(),
            hours: "Attraction hours vary".to_string(),
            highlights: strings(&["Shibuya", "Asakusa", "Temples"]),
            photos: Vec::new(),
            video_url: "https://www.youtube.com/results?search_query=tokyo+travel+guide"
                .to_string(),
            web_url: "https://www.gotokyo.org".to_string(),
        },
    ]
}
