//! Grid layout controls for the composite image.
//!
//! Lets the user leave the arrangement to the server or pin the number
//! of columns or rows. The choice is sent as query parameters with the
//! next submission.

use dioxus::prelude::*;
use montage_session::GridLayout;

/// Count shown when switching from `Auto` to a fixed arrangement.
const DEFAULT_COUNT: u32 = 2;

/// Upper bound for the column/row count input.
const MAX_COUNT: u32 = 50;

/// Props for the [`LayoutControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LayoutControlsProps {
    /// Current layout.
    layout: GridLayout,
    /// Whether the controls are locked (during a submission).
    disabled: bool,
    /// Callback fired when the layout changes.
    on_change: EventHandler<GridLayout>,
}

/// Mode select plus a count input for fixed layouts.
#[component]
pub fn LayoutControls(props: LayoutControlsProps) -> Element {
    let on_change = props.on_change;
    let (mode, count) = match props.layout {
        GridLayout::Auto => ("auto", None),
        GridLayout::Columns(n) => ("columns", Some(n)),
        GridLayout::Rows(n) => ("rows", Some(n)),
    };

    rsx! {
        div { class: "montage-controls",
            {render_select(
                "layout_mode",
                "Arrangement",
                &[("auto", "Automatic"), ("columns", "Fixed columns"), ("rows", "Fixed rows")],
                mode,
                props.disabled,
                move |value: String| {
                    let n = count.unwrap_or(DEFAULT_COUNT);
                    let layout = match value.as_str() {
                        "columns" => GridLayout::Columns(n),
                        "rows" => GridLayout::Rows(n),
                        _ => GridLayout::Auto,
                    };
                    on_change.call(layout);
                },
            )}

            if let Some(n) = count {
                {render_count(
                    "layout_count",
                    if mode == "columns" { "Columns" } else { "Rows" },
                    n,
                    props.disabled,
                    move |n: u32| {
                        let layout = if mode == "columns" {
                            GridLayout::Columns(n)
                        } else {
                            GridLayout::Rows(n)
                        };
                        on_change.call(layout);
                    },
                )}
            }
        }
    }
}

/// Render a labeled select dropdown.
fn render_select(
    id: &str,
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
    disabled: bool,
    on_change: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let options: Vec<(String, String)> = options
        .iter()
        .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
        .collect();
    let selected = selected.to_string();

    rsx! {
        div { class: "montage-field",
            label { r#for: "{id}", class: "montage-field__label", "{label}" }
            select {
                id: "{id}",
                class: "montage-input",
                value: "{selected}",
                disabled: disabled,
                onchange: move |e| {
                    on_change(e.value());
                },

                for (value, display) in options.iter() {
                    option {
                        value: "{value}",
                        selected: value == &selected,
                        "{display}"
                    }
                }
            }
        }
    }
}

/// Render a labeled numeric input clamped to `1..=MAX_COUNT`.
///
/// Unparsable input is ignored; the field keeps its last valid value.
fn render_count(
    id: &str,
    label: &str,
    value: u32,
    disabled: bool,
    on_change: impl Fn(u32) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "montage-field",
            label { r#for: "{id}", class: "montage-field__label", "{label}" }
            input {
                r#type: "number",
                id: "{id}",
                class: "montage-input",
                min: "1",
                max: "{MAX_COUNT}",
                step: "1",
                value: "{value}",
                disabled: disabled,
                onchange: move |e| {
                    if let Ok(n) = e.value().trim().parse::<u32>() {
                        on_change(n.clamp(1, MAX_COUNT));
                    }
                },
            }
        }
    }
}
