use std::rc::Rc;
use std::time::Duration;

use easel_canvas::headless::{HeadlessDrag, HeadlessElement, HeadlessFrame, HeadlessHost, HostCall};
use easel_canvas::{
    DragDelta, DragSignal, FrameAction, FrameAttributes, FrameCollaborators, FrameModel,
    FrameSyncController, FrameSyncOptions, ManualClock, PointerEvent, SetOptions, StyleProp,
    TransitionEvent,
};
use easel_common::{Event, EventBus, FrameId, NodeRef, ScenarioError, WindowRef};
use easel_config::EaselConfig;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info};

use super::patch::patch_from_values;
use super::{Scenario, Step};

/// Inline styles of the wrapper after a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styles {
    pub left: String,
    pub top: String,
    pub width: String,
    pub height: String,
}

/// What one step did, as seen from outside the controller.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub op: &'static str,
    pub styles: Styles,
    pub attributes: FrameAttributes,
    pub revision: u64,
    pub animating: bool,
    pub dragging: bool,
    /// The debounced overlay recalculation ran during this step.
    pub committed: bool,
    pub host_calls: Vec<HostCall>,
    pub events: Vec<Event>,
}

struct Replay {
    model: FrameModel,
    controller: FrameSyncController,
    host: Rc<HeadlessHost>,
    drag: HeadlessDrag,
    clock: ManualClock,
    bus_rx: broadcast::Receiver<Event>,
}

impl Replay {
    fn new(scenario: &Scenario, config: &EaselConfig) -> Self {
        let model = FrameModel::new(FrameId(1), scenario.frame.clone());

        let mut element =
            HeadlessElement::new().with_transition(Duration::from_millis(scenario.transition_ms));
        if let Some([w, h]) = scenario.content_size {
            element = element.with_intrinsic_size(w, h);
        }
        let host = Rc::new(HeadlessHost::new());
        host.set_zoom_multiplier(scenario.zoom);
        let drag = HeadlessDrag::new();
        let clock = ManualClock::new();
        let bus = EventBus::new(config.canvas.bus_capacity as usize);
        let bus_rx = bus.subscribe();

        let controller = FrameSyncController::new(
            &model,
            FrameCollaborators {
                element: Box::new(element),
                frame: Box::new(HeadlessFrame::new(NodeRef(1), WindowRef(1))),
                host: host.clone(),
                drag: Box::new(drag.clone()),
                bus,
                clock: Rc::new(clock.clone()),
            },
            FrameSyncOptions::from_config(config),
        );

        Self {
            model,
            controller,
            host,
            drag,
            clock,
            bus_rx,
        }
    }

    fn apply(&mut self, index: usize, step: &Step) -> Result<(), ScenarioError> {
        match step {
            Step::Set { values, silent } => {
                let patch = patch_from_values(index, values)?;
                let opts = if *silent {
                    SetOptions::silent()
                } else {
                    SetOptions::default()
                };
                self.model.set(patch, opts);
                self.controller.process_model_events(&mut self.model);
            }
            Step::Loaded => {
                self.model.trigger_loaded();
                self.controller.process_model_events(&mut self.model);
            }
            Step::Render => {
                self.controller.render();
            }
            Step::DragStart { at } => {
                let pointer = at.map(|[x, y]| PointerEvent::at(x, y));
                self.controller.on_action(FrameAction::Move, pointer.as_ref());
                if self.drag.take_started().is_some() {
                    self.controller.on_drag(&mut self.model, DragSignal::Start);
                }
            }
            Step::DragMove { dx, dy } => {
                let delta = DragDelta { x: *dx, y: *dy };
                self.controller.on_drag(&mut self.model, DragSignal::Move(delta));
            }
            Step::DragEnd => self.controller.on_drag(&mut self.model, DragSignal::End),
            Step::TransitionEnd { event } => {
                let name = event.as_deref().unwrap_or("transitionend");
                let event = TransitionEvent::from_dom_name(name).ok_or_else(|| {
                    ScenarioError::InvalidStep {
                        index,
                        reason: format!("'{name}' is not a transition end event"),
                    }
                })?;
                self.controller.on_transition_end(event);
            }
            Step::Scroll => self.controller.on_frame_scroll(),
            Step::Advance { ms } => self.clock.advance(Duration::from_millis(*ms)),
            Step::Remove => self.controller.on_action(FrameAction::Remove, None),
        }
        Ok(())
    }

    fn report(&mut self, index: usize, op: &'static str, committed: bool) -> StepReport {
        let element = self.controller.element();
        let mut events = Vec::new();
        while let Ok(event) = self.bus_rx.try_recv() {
            events.push(event);
        }
        StepReport {
            index,
            op,
            styles: Styles {
                left: element.style(StyleProp::Left),
                top: element.style(StyleProp::Top),
                width: element.style(StyleProp::Width),
                height: element.style(StyleProp::Height),
            },
            attributes: self.model.attributes().clone(),
            revision: self.model.revision(),
            animating: self.controller.is_animating(),
            dragging: self.controller.is_dragging(),
            committed,
            host_calls: self.host.take_calls(),
            events,
        }
    }
}

/// Replay every step, ticking the controller after each one.
///
/// Stops at the first invalid step.
pub fn run(scenario: &Scenario, config: &EaselConfig) -> Result<Vec<StepReport>, ScenarioError> {
    let mut replay = Replay::new(scenario, config);
    info!(
        frame = scenario.frame.name.as_str(),
        steps = scenario.steps.len(),
        "replaying scenario"
    );

    let mut reports = Vec::with_capacity(scenario.steps.len());
    for (index, step) in scenario.steps.iter().enumerate() {
        replay.apply(index, step)?;
        let committed = replay.controller.tick();
        debug!(index, op = step.op(), committed, "step applied");
        reports.push(replay.report(index, step.op(), committed));
    }
    Ok(reports)
}
