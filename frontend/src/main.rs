use shared::{parse_application_list, Application};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::review_queue::ReviewQueue;
use components::toast::ToastProvider;
use config::AppConfig;
use services::logging::Logger;

const DEMO_APPLICATIONS: &str = include_str!("../fixtures/applications.json");

/// Applications bundled with the build for the review page
fn load_demo_applications() -> Vec<Application> {
    match parse_application_list(DEMO_APPLICATIONS) {
        Ok((applications, skipped)) => {
            for (index, e) in skipped {
                Logger::warn_with_component("app", &format!("Skipping bundled application #{}: {}", index, e));
            }
            applications
        }
        Err(e) => {
            Logger::error_with_component("app", &format!("Failed to parse bundled applications: {}", e));
            Vec::new()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_build_env());
    let applications = use_memo((), |_| load_demo_applications());

    use_effect_with((), {
        let config = config.clone();
        move |_| {
            let mode = match &config.review_api_base_url {
                Some(url) => format!("submitting reviews to {}", url),
                None => "review API not configured, decisions are only announced".to_string(),
            };
            Logger::info_with_component(
                "app",
                &format!("Uploads served from {}; {}", config.uploads.base_url(), mode),
            );
            || ()
        }
    });

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ToastProvider>
                <header class="header">
                    <div class="container">
                        <h1>{"Verification Review"}</h1>
                    </div>
                </header>
                <main class="main">
                    <div class="container">
                        <ReviewQueue applications={(*applications).clone()} />
                    </div>
                </main>
            </ToastProvider>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
