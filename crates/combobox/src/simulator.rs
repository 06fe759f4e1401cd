//! Program simulator for driving a model without a terminal or browser.
//!
//! The simulator plays the role of a binding: it queues messages, calls
//! `update`/`view` for each one and executes returned commands. Change
//! notifications produced by commands are collected for the host instead of
//! being fed back into the model.

use std::collections::VecDeque;

use crate::command::Cmd;
use crate::event::ChangeEvent;
use crate::message::Message;
use crate::model::Model;

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
}

/// A simulator for testing Model implementations headlessly.
///
/// # Example
///
/// ```rust
/// use combobox::{Combobox, KeyMsg, KeyType, Message};
/// use combobox::message::{FocusMsg, SetOptionsMsg};
/// use combobox::simulator::ProgramSimulator;
///
/// let mut sim = ProgramSimulator::new(Combobox::new("fruit"));
/// sim.send(Message::new(SetOptionsMsg(vec!["Apple".into(), "Banana".into()])));
/// sim.send(Message::new(FocusMsg));
/// sim.send(Message::new(KeyMsg::from_type(KeyType::Down)));
/// sim.send(Message::new(KeyMsg::from_type(KeyType::Enter)));
/// sim.run_until_empty();
///
/// assert_eq!(sim.changes()[0].value, "Apple");
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    changes: Vec<ChangeEvent>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            changes: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model, calling init() and capturing any returned command.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Process one message from the queue, calling update and view.
    ///
    /// Returns the command returned by update, if any.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;

        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Process all pending messages until the queue is empty.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while !self.input_queue.is_empty() {
            if let Some(cmd) = self.step() {
                self.deliver(cmd);
            }
            processed += 1;
        }
        processed
    }

    fn deliver(&mut self, cmd: Cmd) {
        let Some(msg) = cmd.execute() else {
            return;
        };
        if let Some(change) = msg.downcast::<ChangeEvent>() {
            self.changes.push(change);
        }
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the current model state.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Change notifications produced so far, in order.
    pub fn changes(&self) -> &[ChangeEvent] {
        &self.changes
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo {
        value: i32,
    }

    impl Model for Echo {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, msg: Message) -> Option<Cmd> {
            let n = msg.downcast::<i32>()?;
            self.value += n;
            let total = self.value;
            Some(Cmd::new(move || {
                Message::new(ChangeEvent::new(total.to_string()))
            }))
        }

        fn view(&self) -> String {
            format!("Value: {}", self.value)
        }
    }

    #[test]
    fn test_simulator_init_called_once() {
        let mut sim = ProgramSimulator::new(Echo { value: 0 });
        sim.init();
        sim.init();
        assert_eq!(sim.stats().init_calls, 1);
        assert_eq!(sim.last_view(), Some("Value: 0"));
    }

    #[test]
    fn test_simulator_collects_changes() {
        let mut sim = ProgramSimulator::new(Echo { value: 0 });
        sim.send(Message::new(5));
        sim.send(Message::new(3));
        assert_eq!(sim.run_until_empty(), 2);

        assert_eq!(sim.model().value, 8);
        let values: Vec<&str> = sim.changes().iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["5", "8"]);
    }

    #[test]
    fn test_simulator_step_processes_one_message() {
        let mut sim = ProgramSimulator::new(Echo { value: 0 });
        sim.send(Message::new(1));
        sim.send(Message::new(2));

        assert!(sim.step().is_some());
        assert_eq!(sim.model().value, 1);
        assert_eq!(sim.pending_count(), 1);
        assert!(sim.changes().is_empty());
    }

    #[test]
    fn test_simulator_stats() {
        let mut sim = ProgramSimulator::new(Echo { value: 0 });
        sim.send(Message::new(1));
        sim.send(Message::new("ignored"));
        sim.run_until_empty();

        let stats = sim.stats();
        assert_eq!(stats.update_calls, 2);
        assert_eq!(stats.view_calls, 3);
        assert_eq!(stats.commands_returned, 1);
        assert_eq!(sim.views().len(), 3);
    }
}
