//! The combobox component.
//!
//! [`Combobox`] owns the option rows, the selection cursor and the text
//! value. Bindings call its handlers with native events and mirror
//! [`Combobox::render_tree`] or [`Combobox::view`] back to the screen.
//!
//! # Example
//!
//! ```rust
//! use combobox::{Combobox, KeyMsg, KeyType};
//!
//! let mut combo = Combobox::new("fruit");
//! combo.set_options(["Apple", "Banana", "Cherry"]);
//! combo.on_focus();
//! combo.on_input("an");
//!
//! combo.on_keydown(&KeyMsg::from_type(KeyType::Down));
//! let result = combo.on_keydown(&KeyMsg::from_type(KeyType::Enter));
//!
//! assert_eq!(combo.value(), "Banana");
//! assert_eq!(result.change.unwrap().value, "Banana");
//! ```

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::command::Cmd;
use crate::config::ComboboxConfig;
use crate::error::Result;
use crate::event::{CHANGE_EVENT, ChangeEvent, ChangeListener, EventResult};
use crate::filter::Filter;
use crate::key::KeyMsg;
use crate::keymap::{KeyMap, matches};
use crate::message::{BlurMsg, FocusMsg, HoverMsg, InputMsg, Message, PressMsg, SetOptionsMsg};
use crate::model::Model;
use crate::mouse::{MouseAction, MouseButton, MouseMsg};
use crate::navigation::{self, Cursor, NavigationPolicy};
use crate::options::OptionSet;
use crate::render::{
    InputNode, ListNode, RenderTree, Row, RowNode, input_attributes, list_attributes, pad,
    row_attributes, truncate,
};
use crate::style::Styles;
use crate::text_field::{TextField, single_line};
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    MoveNext,
    MovePrev,
    Commit,
    Cancel,
}

/// A searchable dropdown: a text field over a filterable list of options.
pub struct Combobox {
    id: String,
    prompt: String,
    placeholder: String,
    width: usize,
    show_help: bool,
    navigation: NavigationPolicy,

    /// Key bindings.
    pub key_map: KeyMap,
    /// Styles used by [`Combobox::view`].
    pub styles: Styles,

    options_attribute: String,
    rows: Vec<Row>,
    cursor: Cursor,
    input: TextField,
    expanded: bool,
    descendant_linked: bool,
    viewport: Viewport,
    generation: u64,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for Combobox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("navigation", &self.navigation)
            .field("rows", &self.rows.len())
            .field("cursor", &self.cursor)
            .field("input", &self.input)
            .field("expanded", &self.expanded)
            .field("viewport", &self.viewport)
            .field("generation", &self.generation)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Combobox {
    /// Creates an empty combobox with default settings.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self::build(&ComboboxConfig::with_id(id), Styles::default())
    }

    /// Creates a combobox from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`](crate::Error::InvalidColor) if a
    /// configured color cannot be parsed.
    pub fn from_config(config: &ComboboxConfig) -> Result<Self> {
        let styles = Styles::from_config(&config.styles)?;
        Ok(Self::build(config, styles))
    }

    pub(crate) fn build(config: &ComboboxConfig, styles: Styles) -> Self {
        Self {
            id: config.id.clone(),
            prompt: config.prompt.clone(),
            placeholder: config.placeholder.clone(),
            width: config.width,
            show_help: config.show_help,
            navigation: config.navigation,
            key_map: KeyMap::from_config(&config.keys),
            styles,
            options_attribute: OptionSet::default().to_attribute(),
            rows: Vec::new(),
            cursor: Cursor::None,
            input: TextField::new(),
            expanded: false,
            descendant_linked: false,
            viewport: Viewport::new(config.list_height),
            generation: 0,
            listeners: Vec::new(),
        }
    }

    /// Sets the navigation policy.
    #[must_use]
    pub fn with_navigation(mut self, policy: NavigationPolicy) -> Self {
        self.navigation = policy;
        self
    }

    /// Sets the number of rows shown at once.
    #[must_use]
    pub fn with_list_height(mut self, height: usize) -> Self {
        self.viewport = Viewport::new(height);
        self
    }

    /// Sets the styles used by [`Combobox::view`].
    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the option set and rebuilds every row.
    ///
    /// The cursor resets to none and the render generation advances.
    pub fn set_options<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = OptionSet::new(labels);
        self.options_attribute = set.to_attribute();
        self.rebuild(set.labels());
    }

    /// Reads the option set back from the attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionsParse`](crate::Error::OptionsParse) or
    /// [`Error::OptionsShape`](crate::Error::OptionsShape) if the attribute
    /// was set to something that is not a JSON array of scalars.
    pub fn options(&self) -> Result<Vec<String>> {
        OptionSet::from_attribute(&self.options_attribute).map(OptionSet::into_labels)
    }

    /// Sets the option set from its JSON attribute form.
    ///
    /// A malformed attribute is still stored, so reading it back fails the
    /// same way. The rows are cleared in that case.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the attribute.
    pub fn set_options_attribute(&mut self, attribute: &str) -> Result<()> {
        self.options_attribute = attribute.to_string();
        match OptionSet::from_attribute(attribute) {
            Ok(set) => {
                self.rebuild(set.labels());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %self.id, error = %err, "malformed options attribute");
                self.rebuild(&[]);
                Err(err)
            }
        }
    }

    /// The raw option attribute.
    #[must_use]
    pub fn options_attribute(&self) -> &str {
        &self.options_attribute
    }

    fn rebuild(&mut self, labels: &[String]) {
        let filter = Filter::new(&self.input.value());
        self.rows = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut row = Row::new(&self.id, i, label.as_str());
                row.visible = filter.matches(label);
                row
            })
            .collect();
        self.cursor = Cursor::None;
        self.descendant_linked = false;
        self.viewport.reset();
        self.generation += 1;
        tracing::debug!(
            id = %self.id,
            rows = self.rows.len(),
            generation = self.generation,
            "rebuilt option rows"
        );
    }

    /// Handles a change of the text value, filtering the rows.
    pub fn on_input(&mut self, value: &str) {
        self.input.set_value(value);
        self.apply_filter();
    }

    /// Handles a key press that reached the text field.
    ///
    /// Navigation keys report `prevent_default`; a commit reports the
    /// change. Keys without a binding are ignored here, the host's text box
    /// edits the value and reports it through [`Combobox::on_input`].
    pub fn on_keydown(&mut self, key: &KeyMsg) -> EventResult {
        match self.action(key) {
            Some(Action::MoveNext) => {
                self.move_next();
                EventResult::prevented()
            }
            Some(Action::MovePrev) => {
                self.move_prev();
                EventResult::prevented()
            }
            Some(Action::Commit) => EventResult::ignored().with_change(self.commit()),
            Some(Action::Cancel) => {
                self.cancel();
                EventResult::ignored()
            }
            None => EventResult::ignored(),
        }
    }

    /// Handles the text field gaining focus.
    pub fn on_focus(&mut self) {
        self.input.focus();
        self.expanded = true;
    }

    /// Handles the text field losing focus.
    pub fn on_blur(&mut self) {
        self.input.blur();
        self.expanded = false;
    }

    /// Handles the pointer entering the row at `index`.
    pub fn on_hover(&mut self, index: usize) {
        if self.can_select(index) {
            self.select(Cursor::At(index));
        }
    }

    /// Handles a pointer press on the row at `index`, committing it.
    ///
    /// The result asks the binding to suppress the default action so the
    /// text field keeps focus.
    pub fn on_press(&mut self, index: usize) -> EventResult {
        if !self.can_select(index) {
            return EventResult::ignored();
        }
        self.select(Cursor::At(index));
        EventResult::prevented().with_change(self.commit())
    }

    /// Highlights the next row, wrapping past the end.
    pub fn move_next(&mut self) {
        let target = navigation::move_next(self.cursor, &self.visibility(), self.navigation);
        self.select(target);
    }

    /// Highlights the previous row, wrapping before the start.
    pub fn move_prev(&mut self) {
        let target = navigation::move_prev(self.cursor, &self.visibility(), self.navigation);
        self.select(target);
    }

    /// Commits the highlighted row.
    ///
    /// Copies the row's label into the text value, unlinks the active
    /// descendant, focuses the field and notifies every listener. Does
    /// nothing when no row is highlighted.
    pub fn commit(&mut self) -> Option<ChangeEvent> {
        let index = self.cursor.index()?;
        let label = self.rows.get(index)?.label.clone();

        self.input.set_value(&label);
        self.descendant_linked = false;
        self.on_focus();

        let event = ChangeEvent::new(label);
        for listener in &mut self.listeners {
            listener(&event);
        }
        tracing::debug!(
            id = %self.id,
            event = CHANGE_EVENT,
            index,
            value = %event.value,
            "committed option"
        );
        Some(event)
    }

    /// Leaves the text field. The cursor is kept.
    pub fn cancel(&mut self) {
        self.on_blur();
    }

    /// Registers a callback for committed values.
    pub fn add_change_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn action(&self, key: &KeyMsg) -> Option<Action> {
        let km = &self.key_map;
        if matches(key, &[&km.move_next]) {
            Some(Action::MoveNext)
        } else if matches(key, &[&km.move_prev]) {
            Some(Action::MovePrev)
        } else if matches(key, &[&km.commit]) {
            Some(Action::Commit)
        } else if matches(key, &[&km.cancel]) {
            Some(Action::Cancel)
        } else {
            None
        }
    }

    fn apply_filter(&mut self) {
        let filter = Filter::new(&self.input.value());
        for row in &mut self.rows {
            row.visible = filter.matches(&row.label);
        }
        self.cursor = Cursor::None;
        self.descendant_linked = false;
        self.viewport.clamp(self.visible_count());
        tracing::debug!(
            id = %self.id,
            filter = filter.needle(),
            visible = self.visible_count(),
            "filtered options"
        );
    }

    fn can_select(&self, index: usize) -> bool {
        self.navigation.allows(index, &self.visibility())
    }

    fn select(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.descendant_linked = !cursor.is_none();
        if let Cursor::At(index) = cursor {
            self.viewport.align_bottom(self.scroll_position(index));
        }
        tracing::debug!(id = %self.id, cursor = ?cursor, "cursor moved");
    }

    /// Position of a row among the visible rows. Hidden rows take no space
    /// and scroll the list to the top.
    fn scroll_position(&self, index: usize) -> usize {
        match self.rows.get(index) {
            Some(row) if row.visible => self.rows[..index].iter().filter(|r| r.visible).count(),
            _ => 0,
        }
    }

    /// The element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The current text value.
    #[must_use]
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// The selection cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Every rendered row, hidden ones included.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Visibility flag of every row, in order.
    #[must_use]
    pub fn visibility(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.visible).collect()
    }

    /// Number of rows passing the filter.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| row.visible).count()
    }

    /// The highlighted row.
    #[must_use]
    pub fn selected_row(&self) -> Option<&Row> {
        self.cursor.index().and_then(|i| self.rows.get(i))
    }

    /// Label of the highlighted row.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_row().map(|row| row.label.as_str())
    }

    /// Id of the row the input points at through `aria-activedescendant`.
    #[must_use]
    pub fn active_descendant(&self) -> Option<&str> {
        if !self.descendant_linked {
            return None;
        }
        self.selected_row().map(|row| row.id.as_str())
    }

    /// Whether the dropdown is shown.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the text field has focus.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.input.focused()
    }

    /// The navigation policy.
    #[must_use]
    pub fn navigation(&self) -> NavigationPolicy {
        self.navigation
    }

    /// The list scroll window.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Counts option-set replacements. Filtering never changes it.
    #[must_use]
    pub fn render_generation(&self) -> u64 {
        self.generation
    }

    /// Builds the render tree from the current state.
    #[must_use]
    pub fn render_tree(&self) -> RenderTree {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let selected = self.cursor == Cursor::At(i);
                RowNode {
                    id: row.id.clone(),
                    label: row.label.clone(),
                    visible: row.visible,
                    selected,
                    attributes: row_attributes(row, selected),
                }
            })
            .collect();

        RenderTree {
            id: self.id.clone(),
            input: InputNode {
                value: self.value(),
                focused: self.focused(),
                attributes: input_attributes(&self.id, self.expanded, self.active_descendant()),
            },
            list: ListNode {
                id: format!("{}-list", self.id),
                expanded: self.expanded,
                scroll_top: self.viewport.offset(),
                attributes: list_attributes(&self.id),
                rows,
            },
        }
    }

    /// Maps a view line to the row drawn on it.
    ///
    /// Line 0 is the text field; rows follow while the list is expanded.
    #[must_use]
    pub fn row_at(&self, line: usize) -> Option<usize> {
        if !self.expanded || line == 0 {
            return None;
        }
        let visible = self.visible_indices();
        self.viewport
            .position_at_line(line - 1, visible.len())
            .map(|pos| visible[pos])
    }

    /// Display column of the text cursor on line 0.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        let before: String = self.value().chars().take(self.input.position()).collect();
        self.prompt.width() + before.width()
    }

    fn visible_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.visible)
            .map(|(i, _)| i)
            .collect()
    }

    /// Renders the component as terminal text.
    #[must_use]
    pub fn view(&self) -> String {
        let mut lines = Vec::new();

        let value = self.value();
        let text = if value.is_empty() && !self.placeholder.is_empty() {
            self.styles.placeholder.render(&self.placeholder)
        } else {
            self.styles.text.render(&value)
        };
        lines.push(format!("{}{text}", self.styles.prompt.render(&self.prompt)));

        if self.expanded {
            let inner = self.width.saturating_sub(2);
            let visible = self.visible_indices();
            for pos in self.viewport.window(visible.len()) {
                let index = visible[pos];
                let label = single_line(&self.rows[index].label);
                let label = pad(&truncate(&label, inner), inner);
                if self.cursor == Cursor::At(index) {
                    lines.push(self.styles.selected.render(&format!("› {label}")));
                } else {
                    lines.push(self.styles.option.render(&format!("  {label}")));
                }
            }

            if self.rows.is_empty() {
                lines.push(self.styles.empty.render("  No options"));
            } else if visible.is_empty() {
                lines.push(self.styles.empty.render("  No matches"));
            }

            if self.show_help {
                let help: Vec<String> = self
                    .key_map
                    .short_help()
                    .iter()
                    .map(|h| format!("{} {}", h.key, h.desc))
                    .collect();
                lines.push(self.styles.placeholder.render(&help.join(" • ")));
            }
        }

        lines.join("\n")
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<ChangeEvent> {
        if !self.focused() {
            return None;
        }
        if self.action(key).is_some() {
            return self.on_keydown(key).change;
        }
        if self.input.handle_key(key) {
            self.apply_filter();
        }
        None
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) -> Option<ChangeEvent> {
        let line = usize::from(mouse.y);
        match (mouse.action, mouse.button) {
            (MouseAction::Press, MouseButton::Left) => {
                if line == 0 {
                    self.on_focus();
                    return None;
                }
                let index = self.row_at(line)?;
                self.on_press(index).change
            }
            (MouseAction::Motion, _) => {
                let index = self.row_at(line)?;
                self.on_hover(index);
                None
            }
            _ => None,
        }
    }
}

impl Model for Combobox {
    fn init(&self) -> Option<Cmd> {
        None
    }

    /// Handles:
    /// - `KeyMsg` - navigation bindings, then text editing (focused only)
    /// - `MouseMsg` - hover and press, hit-tested against the view
    /// - `FocusMsg` / `BlurMsg` - expand and collapse
    /// - `InputMsg`, `SetOptionsMsg`, `HoverMsg`, `PressMsg` - host events
    ///
    /// A commit returns a command yielding the [`ChangeEvent`].
    fn update(&mut self, msg: Message) -> Option<Cmd> {
        let change = if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key)
        } else if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            self.handle_mouse(mouse)
        } else if msg.is::<FocusMsg>() {
            self.on_focus();
            None
        } else if msg.is::<BlurMsg>() {
            self.on_blur();
            None
        } else if let Some(HoverMsg(index)) = msg.downcast_ref::<HoverMsg>() {
            self.on_hover(*index);
            None
        } else if let Some(PressMsg(index)) = msg.downcast_ref::<PressMsg>() {
            self.on_press(*index).change
        } else if let Some(InputMsg(value)) = msg.downcast_ref::<InputMsg>() {
            self.on_input(value);
            None
        } else if let Some(SetOptionsMsg(labels)) = msg.downcast::<SetOptionsMsg>() {
            self.set_options(labels);
            None
        } else {
            None
        };

        change.map(|event| Cmd::new(move || Message::new(event)))
    }

    fn view(&self) -> String {
        Combobox::view(self)
    }
}
