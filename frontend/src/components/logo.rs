use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StrataiLogo)]
pub fn stratai_logo(props: &LogoProps) -> Html {
    html! {
        <div class={classes!("logo", props.class.clone())}>
            <div class="logo__bars">
                <div class="logo__bar logo__bar--short" style="animation-delay: 0s;"></div>
                <div class="logo__bar logo__bar--mid" style="animation-delay: 0.1s;"></div>
                <div class="logo__bar logo__bar--full" style="animation-delay: 0.2s;"></div>
            </div>
            <span class="logo__word">{"Stratai.io"}</span>
        </div>
    }
}
