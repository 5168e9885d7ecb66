use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Field values read at submit time, plus the form so it can be reset.
pub struct SignupRequest {
    pub email: String,
    pub activity: String,
    pub form: HtmlFormElement,
}

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub activities: Vec<String>,
    pub on_submit: Callback<SignupRequest>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let form_ref = use_node_ref();
    let email_ref = use_node_ref();
    let activity_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let email_ref = email_ref.clone();
        let activity_ref = activity_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(form), Some(email), Some(activity)) = (
                form_ref.cast::<HtmlFormElement>(),
                email_ref.cast::<HtmlInputElement>(),
                activity_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };
            on_submit.emit(SignupRequest {
                email: email.value(),
                activity: activity.value(),
                form,
            });
        })
    };

    html! {
      <form id="signup-form" ref={form_ref} {onsubmit}>
        <div class="form-group">
          <label for="email">{ "Student Email:" }</label>
          <input
            type="email"
            id="email"
            ref={email_ref}
            required={true}
            placeholder="your-email@mergington.edu"
          />
        </div>
        <div class="form-group">
          <label for="activity">{ "Select Activity:" }</label>
          <select id="activity" ref={activity_ref} required={true}>
            { for props.activities.iter().map(|name| html! {
                <option key={name.clone()} value={name.clone()}>{ name.clone() }</option>
            }) }
          </select>
        </div>
        <button type="submit">{ "Sign Up" }</button>
      </form>
    }
}
