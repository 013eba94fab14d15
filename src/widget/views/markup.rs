//! # Markup Renderers
//!
//! Pure functions turning country records into the HTML fragments that go
//! into the list and detail containers. Text coming from the API is escaped
//! before it is interpolated.

use crate::widget::models::Country;

/// Render one name-only row per country, in the order received
pub fn render_country_list(countries: &[Country]) -> String {
    countries
        .iter()
        .map(|country| format!("<li>{}</li>", escape_html(&country.name)))
        .collect()
}

/// Render the detail panel of a single country
pub fn render_country_info(country: &Country) -> String {
    let languages: String = country
        .languages
        .iter()
        .map(|language| format!("<li>{}</li>", escape_html(&language.name)))
        .collect();

    format!(
        concat!(
            "<div>",
            "<h2>{name}</h2>",
            "<p><b>Capital:</b> {capital}</p>",
            "<p><b>Population:</b> {population}</p>",
            "<p><b>Languages:</b></p>",
            "<ul>{languages}</ul>",
            "</div>",
            "<img src=\"{flag}\" alt=\"{alt}\" width=\"200\">"
        ),
        name = escape_html(&country.name),
        capital = escape_html(&country.capital),
        population = format_population(country.population),
        languages = languages,
        flag = escape_html(&country.flags.svg),
        alt = escape_html(&country.flag_alt()),
    )
}

/// Format a population with `,` thousands separators (en-US grouping)
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
