use rust_decimal_macros::dec;

use super::catalog_model::{Category, MenuItem};

/// Returns the seed menu used when no catalog blob is present at startup.
pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "1".to_string(),
            name: "Caramel Macchiato".to_string(),
            description: "Freshly steamed milk with vanilla-flavored syrup marked with espresso and topped with a caramel drizzle.".to_string(),
            price: dec!(5.50),
            category: Category::Drinks,
            image: "https://picsum.photos/id/425/400/400".to_string(),
            available: true,
            stock: 10,
            calories: Some(250),
        },
        MenuItem {
            id: "2".to_string(),
            name: "Avocado Toast".to_string(),
            description: "Sourdough toast topped with smashed avocado, chili flakes, and olive oil.".to_string(),
            price: dec!(8.00),
            category: Category::Snacks,
            image: "https://picsum.photos/id/493/400/400".to_string(),
            available: true,
            stock: 10,
            calories: Some(320),
        },
        MenuItem {
            id: "3".to_string(),
            name: "Morning Combo".to_string(),
            description: "Any medium coffee plus a croissant.".to_string(),
            price: dec!(9.50),
            category: Category::Combos,
            image: "https://picsum.photos/id/1060/400/400".to_string(),
            available: true,
            stock: 10,
            calories: Some(450),
        },
        MenuItem {
            id: "4".to_string(),
            name: "Matcha Latte".to_string(),
            description: "Smooth and creamy matcha sweetened just right and served with steamed milk.".to_string(),
            price: dec!(6.00),
            category: Category::Drinks,
            image: "https://picsum.photos/id/431/400/400".to_string(),
            available: true,
            stock: 10,
            calories: Some(210),
        },
        MenuItem {
            id: "5".to_string(),
            name: "Berry Smoothie".to_string(),
            description: "Blend of strawberries, blueberries, raspberries and yogurt.".to_string(),
            price: dec!(7.50),
            category: Category::Specials,
            image: "https://picsum.photos/id/1080/400/400".to_string(),
            available: true,
            stock: 10,
            calories: Some(180),
        },
        MenuItem {
            id: "6".to_string(),
            name: "Chocolate Croissant".to_string(),
            description: "Buttery, flaky croissant filled with rich chocolate.".to_string(),
            price: dec!(4.50),
            category: Category::Snacks,
            image: "https://picsum.photos/id/292/400/400".to_string(),
            available: true,
            stock: 10,
            calories: Some(340),
        },
    ]
}
