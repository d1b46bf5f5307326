use leptos::prelude::*;

#[component]
pub fn SiteFooter(copyright: String) -> impl IntoView {
    view! {
        <footer class="border-t border-primary/20 py-8 mt-12">
            <div class="container mx-auto px-6 text-center text-sm text-gray-400">
                <p>{copyright}</p>
                <p class="mt-2 text-xs text-gray-500">
                    "built " {env!("BUILD_DATE")} " · v" {env!("CARGO_PKG_VERSION")}
                </p>
            </div>
        </footer>
    }
}
