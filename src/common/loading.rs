use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-4 gap-2">
            <span class="loading loading-spinner loading-sm"></span>
            <p class="text-sm text-gray-500">
                {props.text.clone().unwrap_or_else(|| "Loading data...".to_string())}
            </p>
        </div>
    }
}
