//! Demo catalog contents.

use shopfront_core::{Price, ProductId};

use super::CatalogProduct;

fn placeholder(text: &str) -> String {
    format!("/placeholder.svg?height=300&width=300&text={text}")
}

#[allow(clippy::too_many_lines)]
pub(super) fn mock_products() -> Vec<CatalogProduct> {
    vec![
        CatalogProduct {
            id: ProductId::new("1"),
            name: "Handwoven Leather Tote Bag".to_string(),
            price: Price::from_whole(89),
            original_price: Some(Price::from_whole(120)),
            image: placeholder("Leather+Tote"),
            category: "bags".to_string(),
            rating: 4.8,
            reviews: 24,
            is_new: true,
            description: None,
            in_stock: Some(true),
            low_stock: None,
        },
        CatalogProduct {
            id: ProductId::new("2"),
            name: "Abstract Canvas Painting".to_string(),
            price: Price::from_whole(150),
            original_price: None,
            image: placeholder("Abstract+Art"),
            category: "paintings".to_string(),
            rating: 4.9,
            reviews: 18,
            is_new: false,
            description: Some("Original abstract painting on canvas with vibrant colors.".to_string()),
            in_stock: Some(true),
            low_stock: None,
        },
        CatalogProduct {
            id: ProductId::new("3"),
            name: "Bohemian Crossbody Bag".to_string(),
            price: Price::from_whole(65),
            original_price: Some(Price::from_whole(85)),
            image: placeholder("Crossbody+Bag"),
            category: "bags".to_string(),
            rating: 4.6,
            reviews: 32,
            is_new: false,
            description: Some("Stylish bohemian crossbody bag perfect for everyday use.".to_string()),
            in_stock: Some(true),
            low_stock: Some(true),
        },
        CatalogProduct {
            id: ProductId::new("4"),
            name: "Handmade Silver Earrings".to_string(),
            price: Price::from_whole(45),
            original_price: None,
            image: placeholder("Silver+Earrings"),
            category: "accessories".to_string(),
            rating: 4.7,
            reviews: 15,
            is_new: false,
            description: Some("Elegant handmade silver earrings with intricate design.".to_string()),
            in_stock: Some(false),
            low_stock: None,
        },
        CatalogProduct {
            id: ProductId::new("5"),
            name: "Vintage Canvas Tote".to_string(),
            price: Price::from_whole(55),
            original_price: None,
            image: placeholder("Canvas+Tote"),
            category: "totes".to_string(),
            rating: 4.5,
            reviews: 28,
            is_new: false,
            description: Some("Durable vintage-style canvas tote bag for daily adventures.".to_string()),
            in_stock: Some(true),
            low_stock: None,
        },
        CatalogProduct {
            id: ProductId::new("6"),
            name: "Watercolor Landscape".to_string(),
            price: Price::from_whole(200),
            original_price: None,
            image: placeholder("Watercolor+Art"),
            category: "paintings".to_string(),
            rating: 4.9,
            reviews: 12,
            is_new: true,
            description: Some("Beautiful watercolor landscape painting by local artist.".to_string()),
            in_stock: Some(true),
            low_stock: None,
        },
    ]
}
