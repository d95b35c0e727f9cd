// ABOUTME: Seed tables, shared building blocks, and per-mood expansion recipes
// ABOUTME: Pure data; the builder turns these into the default pools
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Seed data for the default mood pools
//!
//! The shared building-block lists are combined per mood by [`recipe`] into a
//! [`PoolRecipe`] describing how that mood's pool is expanded. All data here
//! is static; nothing is randomized.

use crate::models::Mood;

/// Suffixes for light, fresh presentations
pub const SUFFIXES_LIGHT: &[&str] = &[
    "Salad", "Bowl", "Wrap", "Soup", "Sandwich", "Toast", "Smoothie", "Parfait",
];

/// Suffixes for hearty, indulgent presentations
pub const SUFFIXES_HEARTY: &[&str] = &[
    "Bowl", "Platter", "Wrap", "Burger", "Pizza", "Pasta", "Grill", "Curry",
];

/// Health-forward prefixes
pub const PREFIXES_HEALTH: &[&str] = &[
    "Whole-Wheat",
    "Multigrain",
    "High-Protein",
    "Low-Sugar",
    "Fiber-Rich",
    "Herbed",
    "Garlic",
];

/// Playful, indulgent prefixes
pub const PREFIXES_FUN: &[&str] = &[
    "Cheesy", "Spicy", "Zesty", "Crispy", "Loaded", "Smoky", "Tangy", "Masala",
];

/// Gentle, calming prefixes
pub const PREFIXES_SOOTHING: &[&str] = &["Warm", "Mild", "Gentle", "Light", "Herbal", "Calming"];

/// Fruit ingredients used by the padding generator
pub const FRUITY: &[&str] = &[
    "Mango",
    "Berry",
    "Banana",
    "Apple",
    "Pineapple",
    "Kiwi",
    "Pomegranate",
    "Grapes",
];

/// Presentation suffixes used by the padding generator
pub const PAD_SUFFIXES: &[&str] = &["Smoothie", "Bowl", "Parfait"];

/// Protein staples
pub const PROTEINS: &[&str] = &[
    "Paneer", "Tofu", "Egg", "Chicken", "Fish", "Salmon", "Tuna", "Chickpea", "Rajma", "Chole",
    "Lentil",
];

/// Indian comfort dishes
pub const INDIAN_COMFORT: &[&str] = &[
    "Khichdi",
    "Dal Rice",
    "Curd Rice",
    "Lemon Rice",
    "Veg Pulao",
    "Upma",
    "Poha",
    "Paratha",
    "Thepla",
];

/// Street food favourites
pub const STREET_FOOD: &[&str] = &[
    "Pani Puri",
    "Bhel Puri",
    "Sev Puri",
    "Vada Pav",
    "Samosa",
    "Kathi Roll",
    "Frankie",
    "Chowmein",
    "Manchurian",
];

/// Sweets and desserts
pub const SWEETS: &[&str] = &[
    "Gulab Jamun",
    "Rasgulla",
    "Kheer",
    "Rabri",
    "Jalebi",
    "Brownie",
    "Cupcake",
    "Donut",
    "Cheesecake",
    "Ice Cream",
];

/// Global cuisine staples
pub const GLOBAL: &[&str] = &[
    "Tacos",
    "Nachos",
    "Quesadilla",
    "Burrito",
    "Hummus",
    "Falafel",
    "Shawarma",
    "Sushi",
    "Ramen",
    "Bibimbap",
];

/// Green vegetables and fresh produce
pub const GREENS: &[&str] = &[
    "Leafy Greens",
    "Spinach",
    "Kale",
    "Broccoli",
    "Lettuce",
    "Cucumber",
    "Carrot",
    "Beet",
    "Zucchini",
];

/// Whole grains
pub const GRAINS: &[&str] = &["Oats", "Quinoa", "Brown Rice", "Millet", "Barley", "Buckwheat"];

/// Nuts and nut butters
pub const NUTS: &[&str] = &[
    "Almonds",
    "Walnuts",
    "Pistachios",
    "Cashews",
    "Peanuts",
    "Mixed Nuts",
    "Peanut Butter",
    "Almond Butter",
];

/// Calming and refreshing drinks
pub const DRINKS: &[&str] = &[
    "Green Tea",
    "Herbal Tea",
    "Buttermilk",
    "Lassi",
    "Warm Milk",
    "Turmeric Latte",
    "Coconut Water",
];

const HAPPY_SEED: &[&str] = &[
    "Margherita Pizza",
    "Veggie Pizza",
    "Paneer Tikka Pizza",
    "Garlic Bread",
    "Pasta Arrabbiata",
    "Pasta Alfredo",
    "Chocolate Brownie",
    "Fruit Salad",
    "Tiramisu",
    "Burrito Bowl (veg)",
    "Veg Quesadilla",
    "Cheese Nachos",
    "Hakka Noodles",
    "Veg Burger",
    "Peri-Peri Fries",
    "Street Sandwich",
    "Chole Bhature",
    "Butter Paneer",
    "Dal Makhani",
    "Veg Biryani",
    "Sushi (veg)",
    "Ramen (veg)",
    "Falafel Wrap",
    "Hummus Platter",
    "Tacos (veg)",
    "Loaded Nachos",
    "Paneer Wrap",
    "Veggie Shawarma",
    "Cheesy Corn Toast",
    "Chili Garlic Noodles",
    "Pav Bhaji",
    "Paneer Frankie",
    "Veg Kathi Roll",
    "Manchurian Gravy",
    "Veg Momos",
    "Spring Rolls",
    "Schezwan Noodles",
    "Veg Handi",
    "Stuffed Paratha",
    "Curd Rice",
];

const SAD_SEED: &[&str] = &[
    "Tomato Soup",
    "Sweet Corn Soup",
    "Khichdi",
    "Dal Rice",
    "Curd Rice",
    "Lemon Rice",
    "Veg Pulao",
    "Poha",
    "Upma",
    "Veg Stew",
    "Light Veg Soup",
    "Mashed Potatoes",
    "Grilled Cheese Sandwich",
    "Oats Porridge",
    "Rava Sheera",
    "Sabudana Khichdi",
    "Moong Dal Khichdi",
    "Dalia Porridge",
    "Vegetable Daliya",
    "Steamed Idli",
    "Soft Dosa",
    "Veg Uttapam",
    "Broth Bowl",
    "Chicken Soup",
    "Egg Drop Soup",
    "Soft Paneer Bhurji",
    "Sooji Upma",
    "Lentil Soup",
    "Plain Paratha with Curd",
    "Soft Thepla with Curd",
    "Besan Chilla",
    "Carrot Soup",
    "Pumpkin Soup",
    "Spinach Soup",
];

const STRESSED_SEED: &[&str] = &[
    "Green Tea",
    "Herbal Tea",
    "Chamomile Tea",
    "Ginger Tea",
    "Lemon Honey Water",
    "Cucumber Salad",
    "Greek Yogurt",
    "Yogurt Parfait",
    "Mixed Nuts",
    "Dark Chocolate",
    "Avocado Toast",
    "Oats with Fruit",
    "Banana Smoothie",
    "Berry Smoothie",
    "Protein Smoothie (veg)",
    "Sprouts Salad",
    "Quinoa Salad",
    "Hummus with Veg Sticks",
    "Fruit Bowl",
    "Veg Clear Soup",
    "Miso Soup (veg)",
    "Warm Milk",
    "Turmeric Latte",
    "Coconut Water",
    "Roasted Chickpeas",
    "Baked Sweet Potato",
    "Apple with Peanut Butter",
    "Trail Mix",
    "Whole-Wheat Crackers",
    "Chia Pudding",
    "Overnight Oats",
    "Granola Yogurt",
];

const TIRED_SEED: &[&str] = &[
    "Banana Smoothie",
    "Peanut Butter Toast",
    "Granola Yogurt",
    "Protein Shake",
    "Oats Banana Bowl",
    "Paneer Sandwich",
    "Egg Sandwich",
    "Paneer Wrap",
    "Tofu Stir-Fry",
    "Chicken Salad",
    "Tuna Sandwich",
    "Salmon Bowl",
    "Rajma Chawal",
    "Chole Chawal",
    "Sprouts Chaat",
    "Boiled Eggs",
    "Paneer Bhurji",
    "Paneer Tikka Wrap",
    "Hummus Wrap",
    "Veggie Omelette",
    "Besan Chilla",
    "Paneer Paratha",
    "Tofu Scramble",
    "Quinoa Bowl",
    "Peanut Chaat",
    "Dahi Poha",
    "Cottage Cheese Salad",
    "Fruit + Nuts Bowl",
    "Millet Khichdi",
];

const EXCITED_SEED: &[&str] = &[
    "Pani Puri",
    "Bhel Puri",
    "Sev Puri",
    "Vada Pav",
    "Samosa",
    "Kathi Roll",
    "Frankie",
    "Tacos",
    "Nachos",
    "Quesadilla",
    "Schezwan Noodles",
    "Manchurian",
    "Chili Paneer",
    "Peri-Peri Fries",
    "Popcorn",
    "Corn Chaat",
    "Momos",
    "Spring Rolls",
    "Pizza Slice",
    "Veg Hot Dog",
    "Cheesy Sandwich",
    "Loaded Fries",
    "Tandoori Paneer Tikka",
    "Hakka Noodles",
    "Veggie Burrito",
    "Sushi (veg)",
    "Korean Bibimbap (veg)",
    "Paneer Shawarma",
    "Cheesy Garlic Bread",
];

const BORED_SEED: &[&str] = &[
    "Street Sandwich",
    "French Fries",
    "Donuts",
    "Cupcake",
    "Cookies",
    "Brownie",
    "Ice Cream Sundae",
    "Fruit Cream",
    "Milkshake",
    "Cold Coffee",
    "Candy Popcorn",
    "Nachos with Salsa",
    "Chocolate Muffin",
    "Cheese Balls",
    "Corn Cheese Balls",
    "Paneer Pops",
    "Potato Smiles",
    "Garlic Bread Sticks",
    "Mini Pizza",
    "Pita Chips with Hummus",
    "Veg Nuggets",
    "Waffles",
    "Pancakes",
    "Churros",
    "Pretzels",
    "Apple Pie",
    "Chocolate Fudge",
    "Trail Mix Sweet",
    "Caramel Popcorn",
];

const ANXIOUS_SEED: &[&str] = &[
    "Cucumber Salad",
    "Herbal Tea",
    "Warm Soup",
    "Fruit Bowl",
    "Yogurt",
    "Banana with Peanut Butter",
    "Oatmeal",
    "Khichdi (light)",
    "Veg Clear Soup",
    "Steamed Veggies",
    "Buttermilk",
    "Coconut Water",
    "Roasted Foxnuts (Makhana)",
    "Chia Pudding",
    "Smoothie (low sugar)",
    "Rice + Dal (light)",
    "Steamed Idli",
    "Plain Dosa",
    "Sprouts Salad (mild)",
    "Sabudana Khichdi (light)",
    "Honey Lemon Water",
    "Apple Slices",
    "Boiled Potatoes (light masala)",
    "Porridge (mild)",
];

const RELAXED_SEED: &[&str] = &[
    "Garden Salad",
    "Spinach Salad",
    "Kale Salad",
    "Quinoa Salad",
    "Veg Buddha Bowl",
    "Steamed Idli",
    "Buttermilk",
    "Fruit Smoothie",
    "Light Veg Soup",
    "Veggie Wrap (light)",
    "Grilled Paneer Salad",
    "Tofu Salad",
    "Sprouts Bowl",
    "Stir-Fried Veggies (light oil)",
    "Lentil Soup (light)",
    "Veg Clear Soup",
    "Cucumber Raita",
    "Hummus with Veggies",
    "Avocado Salad",
    "Tomato Basil Soup",
    "Minestrone (veg)",
    "Zucchini Noodles (veg)",
    "Broccoli Stir-Fry (light)",
    "Brown Rice Bowl (veg)",
];

const PREGNANCY_SEED: &[&str] = &[
    "Milk",
    "Warm Milk",
    "Yogurt",
    "Buttermilk",
    "Paneer",
    "Tofu",
    "Boiled Eggs",
    "Lentils",
    "Chickpeas",
    "Rajma",
    "Mixed Beans Salad",
    "Leafy Greens",
    "Spinach Dal",
    "Dal Khichdi",
    "Vegetable Khichdi",
    "Vegetable Pulao (low oil)",
    "Whole-Wheat Roti + Dal",
    "Quinoa Khichdi",
    "Veggie Omelette",
    "Dry Fruits Mix",
    "Almonds",
    "Walnuts",
    "Dates",
    "Fresh Fruit Bowl",
    "Banana Shake (low sugar)",
    "Veggie Poha",
    "Upma with Veggies",
    "Thepla + Curd",
    "Paneer Paratha (light)",
    "Moong Dal Chilla",
    "Besan Chilla",
    "Sprouts Chaat (light)",
    "Carrot Halwa (low sugar)",
    "Coconut Water",
    "Lassi (low sugar)",
    "Ragi Malt",
    "Jaggery Peanut Chikki",
    "Sesame Ladoo (til)",
    "Oats Porridge",
    "Methi Thepla (light)",
    "Beetroot Salad",
    "Broccoli Soup",
    "Tomato Soup",
    "Chicken Soup (if non-veg)",
    "Fish Curry (light)",
    "Egg Curry (light)",
    "Vegetable Daliya",
    "Vegetable Handvo (light oil)",
];

/// How one mood's default pool is expanded from seed data
#[derive(Debug, Clone)]
pub struct PoolRecipe {
    /// Base dishes for the mood
    pub seeds: &'static [&'static str],
    /// Prefixes combined with every seed
    pub prefixes: &'static [&'static str],
    /// Suffixes combined with every seed
    pub suffixes: &'static [&'static str],
    /// Extra items appended verbatim after the combinations
    pub extras: Vec<&'static str>,
    /// Hard cap on the expanded list before padding
    pub max_count: usize,
}

fn join(lists: &[&'static [&'static str]], literals: &[&'static str]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for list in lists {
        out.extend_from_slice(list);
    }
    out.extend_from_slice(literals);
    out
}

/// The expansion recipe for a mood's default pool
#[must_use]
pub fn recipe(mood: Mood) -> PoolRecipe {
    match mood {
        Mood::Happy => PoolRecipe {
            seeds: HAPPY_SEED,
            prefixes: PREFIXES_FUN,
            suffixes: SUFFIXES_HEARTY,
            extras: join(&[SWEETS, GLOBAL, STREET_FOOD], &[]),
            max_count: 120,
        },
        Mood::Sad => PoolRecipe {
            seeds: SAD_SEED,
            prefixes: PREFIXES_SOOTHING,
            suffixes: SUFFIXES_LIGHT,
            extras: join(&[INDIAN_COMFORT], &["Rice Bowl", "Curd Bowl"]),
            max_count: 110,
        },
        Mood::Stressed => PoolRecipe {
            seeds: STRESSED_SEED,
            prefixes: PREFIXES_SOOTHING,
            suffixes: SUFFIXES_LIGHT,
            extras: join(&[DRINKS, NUTS], &["Oat Cookies (low sugar)"]),
            max_count: 110,
        },
        Mood::Tired => PoolRecipe {
            seeds: TIRED_SEED,
            prefixes: PREFIXES_HEALTH,
            suffixes: SUFFIXES_HEARTY,
            extras: join(&[PROTEINS, GRAINS], &["Energy Bar (clean)"]),
            max_count: 115,
        },
        Mood::Excited => PoolRecipe {
            seeds: EXCITED_SEED,
            prefixes: PREFIXES_FUN,
            suffixes: SUFFIXES_HEARTY,
            extras: join(&[STREET_FOOD, GLOBAL], &["Salsa & Chips"]),
            max_count: 115,
        },
        Mood::Bored => PoolRecipe {
            seeds: BORED_SEED,
            prefixes: &["Cheesy", "Crunchy", "Sweet"],
            suffixes: &["Bites", "Pops", "Sticks", "Cups"],
            extras: join(&[SWEETS], &["Fruit Skewers"]),
            max_count: 110,
        },
        Mood::Anxious => PoolRecipe {
            seeds: ANXIOUS_SEED,
            prefixes: PREFIXES_SOOTHING,
            suffixes: SUFFIXES_LIGHT,
            extras: join(&[DRINKS], &["Light Khichdi Bowl", "Soft Chapati + Dal"]),
            max_count: 105,
        },
        Mood::Relaxed => PoolRecipe {
            seeds: RELAXED_SEED,
            prefixes: &["Herbed", "Light"],
            suffixes: SUFFIXES_LIGHT,
            extras: join(&[GREENS, GRAINS], &["Herb Rice Bowl"]),
            max_count: 105,
        },
        Mood::Pregnancy => PoolRecipe {
            seeds: PREGNANCY_SEED,
            prefixes: PREFIXES_HEALTH,
            suffixes: SUFFIXES_LIGHT,
            extras: join(
                &[GREENS, GRAINS, NUTS],
                &["Folate-Rich Salad", "Calcium Smoothie"],
            ),
            max_count: 120,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_a_recipe_with_seeds() {
        for mood in Mood::ALL {
            let r = recipe(mood);
            assert!(!r.seeds.is_empty(), "{mood} has no seeds");
            assert!(r.max_count >= 105, "{mood} cap unexpectedly small");
        }
    }

    #[test]
    fn extras_preserve_source_order() {
        let r = recipe(Mood::Happy);
        // Sweets come first, then global, then street food
        assert_eq!(r.extras[0], "Gulab Jamun");
        assert_eq!(r.extras[SWEETS.len()], "Tacos");
        assert_eq!(r.extras[SWEETS.len() + GLOBAL.len()], "Pani Puri");
    }
}
