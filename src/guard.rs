use egui::{Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect};

/// Swallows context-menu clicks and save/duplicate shortcuts over the list
/// and preview before any widget sees them. Best effort only.
#[derive(Debug, Default)]
pub struct InputGuard {
    regions: Vec<Rect>,
    pointer: Option<Pos2>,
}

impl InputGuard {
    /// Replaces the guarded regions with the ones laid out this frame.
    pub fn set_regions(&mut self, regions: impl IntoIterator<Item = Rect>) {
        self.regions.clear();
        self.regions.extend(regions);
    }

    pub fn filter(&mut self, raw: &mut RawInput) {
        let before = raw.events.len();
        let regions = &self.regions;
        let pointer = &mut self.pointer;
        raw.events.retain(|event| {
            if let Event::PointerMoved(pos) = event {
                *pointer = Some(*pos);
            }
            if let Event::PointerGone = event {
                *pointer = None;
            }
            let inside = pointer.is_some_and(|p| regions.iter().any(|r| r.contains(p)));
            !(inside && is_blocked(event))
        });
        let dropped = before - raw.events.len();
        if dropped > 0 {
            tracing::trace!(dropped, "suppressed guarded input");
        }
    }
}

fn is_blocked(event: &Event) -> bool {
    match event {
        Event::PointerButton {
            button: PointerButton::Secondary,
            ..
        } => true,
        Event::Key {
            key: Key::S | Key::D,
            modifiers,
            ..
        } => has_shortcut_modifier(modifiers),
        _ => false,
    }
}

fn has_shortcut_modifier(modifiers: &Modifiers) -> bool {
    modifiers.ctrl || modifiers.mac_cmd || modifiers.command
}
