//! Pure transition functions over [`WizardSession`]. Each takes the
//! current session and returns a new one; a guard failure returns the
//! error and leaves the caller's session untouched.

use serde_json::Value;

use crate::common::WizardError;
use crate::models::{
    derive_client_id, BasicInfo, PublishState, Section,
};
use crate::wizard::{ReorderDirection, WizardSession, WizardStep};

/// Move forward one step, enforcing the completion guard of the
/// current step. At step 3 this advances through the enabled sections
/// one at a time before reaching step 4.
pub fn advance(
    session: &WizardSession,
) -> Result<WizardSession, WizardError> {
    match session.step {
        WizardStep::Sections => {
            if session.store.enabled_count() == 0 {
                return Err(WizardError::NoSectionsSelected);
            }
            let mut next = session.clone();
            next.step = WizardStep::BasicInfo;
            next.error = None;
            Ok(next)
        }

        WizardStep::BasicInfo => {
            let info = session
                .basic_info
                .as_ref()
                .ok_or(WizardError::MissingBasicInfo)?;

            if info.company.name.trim().is_empty() {
                return Err(WizardError::MissingCompanyName);
            }
            info.domain
                .validate()
                .map_err(WizardError::InvalidDomain)?;

            let mut next = session.clone();
            next.step = WizardStep::Content;
            next.section_cursor = 0;
            next.error = None;
            Ok(next)
        }

        WizardStep::Content => {
            let enabled = session.store.enabled_sections();
            let cursor = session
                .section_cursor
                .min(enabled.len().saturating_sub(1));

            if let Some(current) = enabled.get(cursor) {
                if let Some(field) =
                    current.data.missing_required_field()
                {
                    return Err(WizardError::IncompleteSection {
                        section: current.id.clone(),
                        field,
                    });
                }
            }

            let mut next = session.clone();
            next.error = None;
            if cursor + 1 < enabled.len() {
                next.section_cursor = cursor + 1;
            } else {
                // Toggling and reordering mid-walk can leave an
                // already-visited section incomplete; every enabled
                // section must pass before step 4.
                for config in &enabled {
                    if let Some(field) =
                        config.data.missing_required_field()
                    {
                        return Err(
                            WizardError::IncompleteSection {
                                section: config.id.clone(),
                                field,
                            },
                        );
                    }
                }
                next.step = WizardStep::Publish;
            }
            Ok(next)
        }

        // Final step; nothing to advance to.
        WizardStep::Publish => Ok(session.clone()),
    }
}

/// Move backward one step. Never guarded; a no-op at step 1. At step
/// 3 this first walks back through the enabled sections.
pub fn previous(session: &WizardSession) -> WizardSession {
    let mut next = session.clone();

    match session.step {
        WizardStep::Sections => {}
        WizardStep::BasicInfo => {
            next.step = WizardStep::Sections;
        }
        WizardStep::Content => {
            if session.section_cursor > 0 {
                next.section_cursor = session.section_cursor - 1;
            } else {
                next.step = WizardStep::BasicInfo;
            }
        }
        WizardStep::Publish => {
            next.step = WizardStep::Content;
            next.section_cursor =
                session.store.enabled_count().saturating_sub(1);
        }
    }

    next
}

/// Restore the initial state: step 1, catalog-default sections, a
/// freshly generated client id and a bumped epoch so results of any
/// in-flight call against the old session get discarded.
pub fn reset(
    session: &WizardSession,
    catalog: &[Section],
) -> WizardSession {
    let mut fresh = WizardSession::new(catalog);
    fresh.epoch = session.epoch + 1;
    fresh
}

/// Clear the publish state so the site can be republished after
/// edits, keeping everything else the user built. Never called
/// implicitly; a full [`reset`] is the only other way back to
/// unpublished.
pub fn reset_publish_state(
    session: &WizardSession,
) -> WizardSession {
    let mut next = session.clone();
    next.publish = PublishState::default();
    next
}

/// Enable or disable a section. Disabling a required section is a
/// silent no-op. During the step-3 walk the cursor is clamped so a
/// shrinking enabled set cannot leave it past the end.
pub fn toggle_section(
    session: &WizardSession,
    section_id: &str,
    enabled: bool,
) -> WizardSession {
    let mut next = session.clone();
    next.store.toggle(section_id, enabled);

    if next.step == WizardStep::Content {
        next.section_cursor = next
            .section_cursor
            .min(next.store.enabled_count().saturating_sub(1));
    }

    next
}

/// Swap a section with its neighbor in the enabled ordering.
pub fn reorder_section(
    session: &WizardSession,
    section_id: &str,
    direction: ReorderDirection,
) -> WizardSession {
    let mut next = session.clone();
    next.store.reorder(section_id, direction);
    next
}

/// Deep-merge a patch into one section's content.
pub fn update_section_data(
    session: &WizardSession,
    section_id: &str,
    patch: &Value,
) -> WizardSession {
    let mut next = session.clone();
    next.store.update_data(section_id, patch);
    next
}

/// Commit the basic-info sub-form into the session. The client id is
/// recomputed from the domain choice: a non-empty sanitized host
/// replaces whatever id the session held before.
pub fn set_basic_info(
    session: &WizardSession,
    info: BasicInfo,
) -> WizardSession {
    let mut next = session.clone();
    next.client_id =
        derive_client_id(&session.client_id, &info.domain);
    next.basic_info = Some(info);
    next
}
