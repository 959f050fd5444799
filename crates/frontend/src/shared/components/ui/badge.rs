use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "success", "warning", "error", "info", "progress",
    /// "done", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "info" => "badge--info",
        "progress" => "badge--progress",
        "done" => "badge--done",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}
