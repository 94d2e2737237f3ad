use colored::{ColoredString, Colorize};

use package_sorter_core::{Category, DetailedResult, DisplayConfig};

pub fn category_label(category: Category) -> ColoredString {
    match category {
        Category::Standard => category.as_str().green(),
        Category::Special => category.as_str().yellow(),
        Category::Rejected => category.as_str().red().bold(),
    }
}

/// Fact sheet for one package, one line per fact
pub fn report_lines(report: &DetailedResult, display: &DisplayConfig) -> Vec<String> {
    let dims = &report.dimensions;
    let bulk = if report.is_bulky { "Bulky" } else { "Not bulky" };
    let weight = if report.is_heavy { "Heavy" } else { "Not heavy" };

    vec![
        format!(
            "   Dimensions: {} x {} x {} {}",
            dims.width, dims.height, dims.length, display.length_unit
        ),
        format!(
            "   Volume: {} {}3",
            format_number(report.volume_cm3),
            display.length_unit
        ),
        format!("   Mass: {} {}", report.mass_kg, display.mass_unit),
        format!("   Classification: {}, {}", bulk, weight),
        format!("   Stack: {}", category_label(report.category)),
    ]
}

pub fn status_line(category: Category) -> String {
    format!("   Status: {}", category.handling_note())
}

/// Format with thousands separators, keeping any fractional digits as-is
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
