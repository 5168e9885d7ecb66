use yew::prelude::*;

use crate::message::MessageRegion;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub region: MessageRegion,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    html! {
      <div id="message" class={classes!(props.region.classes())}>
        { props.region.text().to_string() }
      </div>
    }
}
