use colored::Colorize;

use dogam_core::{
    apply_filters, has_filters, level_options, shadow_options, BrowserState, Catalog, Category,
    FacetName, Record, WEATHER_OPTIONS,
};

/// Print the active-filter banner, the match count and one card per
/// matching record, the terminal counterpart of the original grid view.
pub fn print_results(catalog: &Catalog, state: &BrowserState) {
    let records = catalog.records(state.category);
    let matches = apply_filters(records, &state.search_term, &state.filters);

    println!();
    println!("{} {}", state.category.icon(), state.category.label().bold());

    if !state.search_term.is_empty() || has_filters(&state.filters) {
        print_filter_banner(state);
    }

    if matches.is_empty() {
        println!("{}", "데이터가 없습니다".yellow());
        return;
    }

    println!(
        "총 {}개의 항목",
        matches.len().to_string().blue().bold()
    );
    for record in &matches {
        print_card(record);
    }
}

/// Print the selector vocabulary for one category, derived from its full
/// unfiltered collection.
pub fn print_facet_options(records: &[Record], category: Category) {
    println!("{} {}", category.icon(), category.label().bold());

    let facets = category.supported_facets();
    if facets.is_empty() {
        println!("  (이 카테고리에는 필터가 없습니다)");
        return;
    }

    for facet in facets {
        match facet {
            FacetName::Level => {
                println!("  level: {}", join_or(level_options(records).into_iter()));
            }
            FacetName::Weather => {
                let line = WEATHER_OPTIONS
                    .iter()
                    .map(|(symbol, label)| format!("{} {}", symbol, label))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  weather: {}", line);
            }
            FacetName::Shadow => {
                println!("  shadow: {}", shadow_options(records).join(", "));
            }
            FacetName::Location => {}
        }
    }
}

fn print_filter_banner(state: &BrowserState) {
    let mut parts = Vec::new();
    if !state.search_term.is_empty() {
        parts.push(format!("search: {}", state.search_term));
    }
    if !state.filters.levels.is_empty() {
        parts.push(format!("level: {}", join_or(state.filters.levels.iter())));
    }
    if !state.filters.weathers.is_empty() {
        parts.push(format!("weather: {}", join_or(state.filters.weathers.iter())));
    }
    if !state.filters.locations.is_empty() {
        parts.push(format!(
            "location: {}",
            join_or(state.filters.locations.iter())
        ));
    }
    if !state.filters.shadows.is_empty() {
        parts.push(format!("shadow: {}", join_or(state.filters.shadows.iter())));
    }
    println!("{} {}", "filters:".dimmed(), parts.join("; "));
}

fn print_card(record: &Record) {
    match record {
        Record::Fish(fish) => {
            println!(
                "  {} {}  👤 {}",
                level_badge(fish.level),
                fish.name.bold(),
                fish.shadow
            );
            println!(
                "     ⏰ {}  🌤️ {}  📍 {}",
                fish.time, fish.weather, fish.location
            );
        }
        Record::Bird(bird) => {
            println!("  {} {}", level_badge(bird.level), bird.name.bold());
            println!(
                "     ⏰ {}  🌤️ {}  📍 {}",
                bird.time, bird.weather, bird.location
            );
        }
        Record::Insect(insect) => {
            println!("  {} {}", level_badge(insect.level), insect.name.bold());
            println!(
                "     ⏰ {}  🌤️ {}  📍 {}",
                insect.time, insect.weather, insect.location
            );
        }
        Record::Cooking(cooking) => {
            println!("  {} {}", level_badge(cooking.level), cooking.name.bold());
            println!(
                "     🧾 {}  ({})",
                cooking.recipe, cooking.obtain_method
            );
            println!("     💰 비용 {}  효율 {}", cooking.cost, cooking.efficiency);
        }
        Record::Garden(garden) => {
            println!("  {} {}", level_badge(garden.level), garden.crop.bold());
            println!(
                "     🌱 {}  ⏰ {}  💰 비용 {}",
                garden.content, garden.time, garden.cost
            );
        }
        Record::Shop(shop) => {
            println!("  {}", shop.name.bold());
            println!("     💰 {}  🏪 {}", shop.price, shop.method);
        }
        Record::Other(other) => {
            println!("  {}", other.name.bold());
            println!(
                "     💰 {}  📍 {}  ⏰ {}",
                other.price, other.location, other.time
            );
        }
    }

    if let Some(prices) = record.star_prices() {
        print_star_prices(&prices);
    }
}

fn print_star_prices(prices: &[u32; 5]) {
    let line = prices
        .iter()
        .enumerate()
        .map(|(rank, price)| format!("{} {}", "⭐".repeat(rank + 1), price))
        .collect::<Vec<_>>()
        .join("  ");
    println!("     💰 판매가: {}", line.yellow());
}

fn level_badge(level: u32) -> colored::ColoredString {
    format!("[Lv.{:>2}]", level).blue()
}

fn join_or<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" OR ")
}
