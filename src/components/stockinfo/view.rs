use yew::prelude::*;

use super::StockInfoChart;

const PERIODS: [&str; 5] = ["1D", "1W", "1M", "3M", "1Y"];
const DEFAULT_PERIOD: &str = "1D";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticker_symbol: String,
}

/// Detail panel for one instrument: the area chart, a period selector,
/// and the percentage-change readout fed back by the chart.
#[function_component(StockInfo)]
pub fn stock_info(props: &Props) -> Html {
    let period = use_state(|| DEFAULT_PERIOD.to_string());
    let percentage_change = use_state(|| None::<f64>);

    let on_percentage_change = {
        let percentage_change = percentage_change.clone();
        Callback::from(move |value: f64| {
            log::debug!("Percentage change reported: {}", value);
            percentage_change.set(Some(value));
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title text-lg">{&props.ticker_symbol}</h3>
                    {match *percentage_change {
                        Some(value) => {
                            let tone = if value >= 0.0 { "text-success" } else { "text-error" };
                            html! {
                                <span class={classes!("text-sm", "font-semibold", tone)}>
                                    {format!("{:+.2}%", value)}
                                </span>
                            }
                        }
                        None => html! {},
                    }}
                </div>

                <StockInfoChart
                    ticker_symbol={props.ticker_symbol.clone()}
                    period={(*period).clone()}
                    on_percentage_change={on_percentage_change}
                />

                <div class="join">
                    {for PERIODS.into_iter().map(|p| {
                        let selected = *period == p;
                        let period = period.clone();
                        html! {
                            <button
                                class={classes!(
                                    "btn", "btn-xs", "join-item",
                                    selected.then_some("btn-active")
                                )}
                                onclick={Callback::from(move |_| period.set(p.to_string()))}
                            >
                                {p}
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
