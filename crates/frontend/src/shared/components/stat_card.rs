use crate::shared::format::{format_int, format_money};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a StatCard renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Money,
    Integer,
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => format_money(val),
        ValueFormat::Integer => format_int(val.max(0.0) as u64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || match value.get() {
                        Some(v) => format_value(v, format),
                        None => "...".to_string(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(458.61, ValueFormat::Money), "$458.61");
        assert_eq!(format_value(5009.0, ValueFormat::Integer), "5,009");
        // Counters never render negative
        assert_eq!(format_value(-3.0, ValueFormat::Integer), "0");
    }
}
