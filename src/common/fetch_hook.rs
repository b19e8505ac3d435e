use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::FetchState;

/// Fetch hook keyed on a dependency tuple.
///
/// Runs `fetch_fn(deps)` on mount and again whenever `deps` change, and
/// returns the fetch state together with a manual refetch callback.
///
/// Every request captures a generation number; a completion whose
/// generation is no longer current is dropped, so a slow response for
/// inputs the user has already navigated away from never overwrites the
/// state belonging to the latest inputs.
///
/// A previously loaded value stays visible while a refetch is in flight;
/// only the initial load and a retry after failure show the loading state.
#[hook]
pub fn use_fetch_with_deps<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::<T>::NotStarted);
    let generation = use_mut_ref(|| 0u64);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let generation = generation.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback(deps.clone(), move |_, deps| {
            let fetch_state = fetch_state.clone();
            let generation = generation.clone();
            let fetch_fn = fetch_fn.clone();
            let deps = deps.clone();

            let current = {
                let mut counter = generation.borrow_mut();
                *counter += 1;
                *counter
            };

            // Keep stale data visible while the replacement loads
            if !fetch_state.is_success() {
                fetch_state.set(FetchState::Loading);
            }

            wasm_bindgen_futures::spawn_local(async move {
                let result = (**fetch_fn)(deps).await;

                if *generation.borrow() != current {
                    log::debug!("Dropping completion for superseded request {}", current);
                    return;
                }

                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => fetch_state.set(FetchState::Error(err)),
                }
            });
        })
    };

    // Fetch on mount and on every change of the dependency key
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
