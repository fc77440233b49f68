//! Project form component.
//!
//! # Responsibility
//! - Validate submitted form values and create projects from them.
//! - Surface rejected input as a blocking notification.
//!
//! # Invariants
//! - A rejected submit leaves the form untouched and the store unchanged.
//! - The submit handler is bound once in `configure()` and always acts on
//!   the store, renderer and config captured there.

use crate::component::{Component, HostSlot, SharedRenderer, APP_HOST_ID};
use crate::config::BoardConfig;
use crate::model::project::ProjectId;
use crate::store::project_store::SharedStore;
use crate::validation::form::{gather_inputs, FormInput, InputError};
use log::warn;
use std::rc::Rc;

type SubmitHandler = Box<dyn FnMut(&FormInput) -> Result<ProjectId, InputError>>;

/// The project submission form.
pub struct ProjectInput {
    store: SharedStore,
    renderer: SharedRenderer,
    config: BoardConfig,
    on_submit: Option<SubmitHandler>,
}

impl ProjectInput {
    /// Builds an unmounted form component.
    pub fn new(store: SharedStore, renderer: SharedRenderer, config: BoardConfig) -> Self {
        Self {
            store,
            renderer,
            config,
            on_submit: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.on_submit.is_some()
    }

    /// Dispatches a form submit to the bound handler.
    ///
    /// # Errors
    /// - `InputError::NotConfigured` before `configure()` ran.
    /// - `InputError::Invalid` when validation rejects the input; the user
    ///   has already been alerted.
    pub fn submit(&mut self, input: &FormInput) -> Result<ProjectId, InputError> {
        match self.on_submit.as_mut() {
            Some(handler) => handler(input),
            None => Err(InputError::NotConfigured),
        }
    }
}

fn handle_submit(
    store: &SharedStore,
    renderer: &SharedRenderer,
    config: &BoardConfig,
    input: &FormInput,
) -> Result<ProjectId, InputError> {
    let draft = match gather_inputs(input, config) {
        Ok(draft) => draft,
        Err(err) => {
            warn!("event=project_submit module=component status=rejected reason={err}");
            renderer
                .borrow_mut()
                .alert(config.invalid_input_message.as_str());
            return Err(err);
        }
    };

    let id = store
        .borrow_mut()
        .add_project(draft.title, draft.description, draft.people);
    renderer.borrow_mut().reset_form();
    Ok(id)
}

impl Component for ProjectInput {
    fn element_id(&self) -> String {
        "user-input".to_string()
    }

    fn host(&self) -> HostSlot {
        HostSlot::start_of(APP_HOST_ID)
    }

    fn configure(&mut self) {
        let store = Rc::clone(&self.store);
        let renderer = Rc::clone(&self.renderer);
        let config = self.config.clone();
        self.on_submit = Some(Box::new(move |input: &FormInput| {
            handle_submit(&store, &renderer, &config, input)
        }));
    }

    fn render_content(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::ProjectInput;
    use crate::component::testing::RecordingRenderer;
    use crate::component::{mount, SharedRenderer};
    use crate::config::BoardConfig;
    use crate::store::project_store::ProjectStore;
    use crate::validation::form::{FormField, FormInput, InputError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn submit_before_configure_is_rejected() {
        let renderer: SharedRenderer = Rc::new(RefCell::new(RecordingRenderer::default()));
        let mut input =
            ProjectInput::new(ProjectStore::shared(), renderer, BoardConfig::default());
        let err = input
            .submit(&FormInput::new("Build a website", "Redesign the landing page", "3"))
            .expect_err("unconfigured input must reject");
        assert_eq!(err, InputError::NotConfigured);
    }

    #[test]
    fn valid_submit_adds_project_and_resets_form() {
        let store = ProjectStore::shared();
        let recorder = Rc::new(RefCell::new(RecordingRenderer::default()));
        let renderer: SharedRenderer = recorder.clone();
        let mut input = mount(
            ProjectInput::new(store.clone(), renderer.clone(), BoardConfig::default()),
            &renderer,
        );
        assert!(input.is_configured());

        let id = input
            .submit(&FormInput::new("Build a website", "Redesign the landing page", "3"))
            .expect("valid input should be accepted");

        assert_eq!(store.borrow().len(), 1);
        assert!(store.borrow().get(id.as_str()).is_some());
        assert_eq!(
            recorder.borrow().calls,
            vec![
                "attach user-input -> app".to_string(),
                "reset_form".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_submit_alerts_and_keeps_form() {
        let store = ProjectStore::shared();
        let recorder = Rc::new(RefCell::new(RecordingRenderer::default()));
        let renderer: SharedRenderer = recorder.clone();
        let mut input = mount(
            ProjectInput::new(store.clone(), renderer.clone(), BoardConfig::default()),
            &renderer,
        );

        let err = input
            .submit(&FormInput::new("short", "Redesign the landing page", "3"))
            .expect_err("short title must be rejected");

        assert_eq!(
            err,
            InputError::Invalid {
                fields: vec![FormField::Title]
            }
        );
        assert!(store.borrow().is_empty());
        let calls = recorder.borrow().calls.clone();
        assert_eq!(calls.last().map(String::as_str), Some("alert Invalid input, try again"));
        assert!(!calls.contains(&"reset_form".to_string()));
    }
}
