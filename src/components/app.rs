use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::activity_card::ActivityCard;
use super::message_banner::MessageBanner;
use super::signup_form::{SignupForm, SignupRequest};
use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::controller::{Refresh, ViewController};
use crate::message::{AutoHide, GlooTimers, MessageAction, MessageRegion, Notice};
use crate::view::{self, CardView};

enum ListState {
    Loading,
    Loaded(Vec<CardView>),
    Failed,
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| match AppConfig::from_page() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(format!("Bad app config, using defaults: {e}"));
            AppConfig::default()
        }
    });
    let controller = {
        let base = config.api_base.clone();
        use_memo((), move |_| ViewController::new(HttpApi::new(base)))
    };

    let list = use_state(|| ListState::Loading);
    // Kept apart from `list` so a failed load leaves the select untouched.
    let names = use_state(Vec::<String>::new);
    let message = use_reducer(MessageRegion::default);
    let auto_hide = {
        let delay_ms = config.message_timeout_ms;
        use_mut_ref(move || AutoHide::new(GlooTimers, delay_ms))
    };

    let apply_refresh = {
        let list = list.clone();
        let names = names.clone();
        Callback::from(move |refresh: Refresh| match refresh {
            Refresh::Loaded(catalog) => {
                names.set(catalog.names());
                list.set(ListState::Loaded(view::cards(&catalog)));
            }
            Refresh::Failed(e) => {
                error!(format!("Error fetching activities: {e}"));
                list.set(ListState::Failed);
            }
            Refresh::Stale => log!("Dropped an out-of-date activities response"),
        })
    };

    let refresh = {
        let controller = controller.clone();
        let apply_refresh = apply_refresh.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let apply_refresh = apply_refresh.clone();
            spawn_local(async move {
                apply_refresh.emit(controller.refresh_view().await);
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let show_notice = {
        let message = message.clone();
        let auto_hide = auto_hide.clone();
        Callback::from(move |notice: Notice| {
            let hide = message.clone();
            let generation = auto_hide.borrow_mut().arm(move |generation| {
                hide.dispatch(MessageAction::Hide { generation })
            });
            message.dispatch(MessageAction::Show { notice, generation });
        })
    };

    let on_signup = {
        let controller = controller.clone();
        let apply_refresh = apply_refresh.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |req: SignupRequest| {
            let controller = controller.clone();
            let apply_refresh = apply_refresh.clone();
            let show_notice = show_notice.clone();
            spawn_local(async move {
                let SignupRequest {
                    email,
                    activity,
                    form,
                } = req;
                let refreshed = controller
                    .submit_signup(&email, &activity, |outcome| {
                        if let Some(line) = outcome.log_line() {
                            error!(line);
                        }
                        show_notice.emit(outcome.notice());
                        if outcome.resets_form() {
                            form.reset();
                        }
                    })
                    .await;
                if let Some(refresh) = refreshed {
                    apply_refresh.emit(refresh);
                }
            });
        })
    };

    let on_unregister = {
        let controller = controller.clone();
        let apply_refresh = apply_refresh.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let controller = controller.clone();
            let apply_refresh = apply_refresh.clone();
            spawn_local(async move {
                let refreshed = controller
                    .remove_participant(&activity, &email, |outcome| {
                        if let Some(line) = outcome.log_line() {
                            error!(line);
                        }
                    })
                    .await;
                if let Some(refresh) = refreshed {
                    apply_refresh.emit(refresh);
                }
            });
        })
    };

    let list_body = match &*list {
        ListState::Loading => html! { <p>{ view::LOADING }</p> },
        ListState::Failed => html! { <p>{ view::LOAD_FAILED }</p> },
        ListState::Loaded(cards) => cards
            .iter()
            .map(|card| {
                html! {
                  <ActivityCard
                    key={card.name.clone()}
                    card={card.clone()}
                    on_unregister={on_unregister.clone()}
                  />
                }
            })
            .collect::<Html>(),
    };

    html! {
      <>
        <header>
          <h1>{ "Mergington High School" }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>
        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list">{ list_body }</div>
          </section>
          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <SignupForm activities={(*names).clone()} on_submit={on_signup} />
            <MessageBanner region={(*message).clone()} />
          </section>
        </main>
      </>
    }
}
