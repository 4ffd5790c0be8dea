// ============================================================================
// USE SELECTION CHAIN HOOK - Conecta una SelectionChain con Yew
// ============================================================================
// La cadena vive en un Rc<RefCell>: las cargas en vuelo aplican sus resultados
// sobre el estado actual (no sobre un snapshot) y la cadena descarta los
// obsoletos. Cada cambio fuerza un re-render.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use crate::models::Coordinates;
use crate::state::{ChainCommand, SelectionChain};
use crate::viewmodels::{drive, ChainSource};

/// Handle del hook
#[derive(Clone)]
pub struct UseSelectionChainHandle<K: 'static, L: 'static> {
    /// Snapshot de la cadena en este render
    pub chain: SelectionChain<K, L>,
    pub select_target: Callback<Option<K>>,
    pub select_date: Callback<String>,
    pub set_location: Callback<Coordinates>,
}

#[hook]
pub fn use_selection_chain<S>(source: S) -> UseSelectionChainHandle<S::Key, S::Listing>
where
    S: ChainSource + Clone + 'static,
{
    let chain = use_mut_ref(S::new_chain);
    let update = use_force_update();

    let select_target = {
        let chain = chain.clone();
        let source = source.clone();
        let update = update.clone();
        Callback::from(move |target: Option<S::Key>| {
            let command = chain.borrow_mut().select_target(target);
            run_command(chain.clone(), source.clone(), command, update.clone());
        })
    };

    let select_date = {
        let chain = chain.clone();
        let source = source.clone();
        let update = update.clone();
        Callback::from(move |date: String| {
            let command = chain.borrow_mut().select_date(date);
            run_command(chain.clone(), source.clone(), command, update.clone());
        })
    };

    let set_location = {
        let chain = chain.clone();
        let update = update.clone();
        Callback::from(move |location: Coordinates| {
            let command = chain.borrow_mut().set_location(location);
            run_command(chain.clone(), source.clone(), command, update.clone());
        })
    };

    let snapshot = chain.borrow().clone();
    UseSelectionChainHandle {
        chain: snapshot,
        select_target,
        select_date,
        set_location,
    }
}

/// Re-render inmediato (datos viejos ya limpiados) y ejecución del comando
fn run_command<S>(
    chain: Rc<RefCell<SelectionChain<S::Key, S::Listing>>>,
    source: S,
    command: Option<ChainCommand<S::Key>>,
    update: UseForceUpdateHandle,
) where
    S: ChainSource + 'static,
{
    update.force_update();
    let Some(command) = command else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let redraw = move || update.force_update();
        drive(chain, &source, command, &redraw).await;
    });
}
