use yew::prelude::*;

use crate::view::{CardView, NO_PARTICIPANTS};

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: CardView,
    /// Emits `(activity, email)` when a participant's delete button is clicked.
    pub on_unregister: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    let participants = if card.participants.is_empty() {
        html! { <li class="participant-item no-participants">{ NO_PARTICIPANTS }</li> }
    } else {
        card.participants
            .iter()
            .map(|p| {
                let onclick = {
                    let on_unregister = props.on_unregister.clone();
                    let activity = card.name.clone();
                    let email = p.email.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_unregister.emit((activity.clone(), email.clone()))
                    })
                };
                html! {
                  <li class="participant-item">
                    <span class="participant-avatar">{ p.avatar.clone() }</span>
                    <span class="participant-email">{ p.email.clone() }</span>
                    <button
                      type="button"
                      class="delete-participant"
                      data-email={p.email.clone()}
                      data-activity={card.name.clone()}
                      title="Unregister participant"
                      {onclick}
                    >
                      { "✕" }
                    </button>
                  </li>
                }
            })
            .collect::<Html>()
    };

    html! {
      <div class="activity-card">
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p class={classes!("availability", card.is_full.then_some("full"))}>
          <strong>{ "Availability:" }</strong>{ format!(" {}", card.availability) }
        </p>
        <div class="participants-section">
          <p class="participants-title">
            { "Participants " }
            <span class="participants-count">{ card.roster_count.clone() }</span>
          </p>
          <ul class="participants-list">{ participants }</ul>
        </div>
      </div>
    }
}
