//! The `#message` region below the signup form.
//!
//! Each shown notice gets a new generation. The hide fired by the auto-hide
//! timer names the generation it was armed for, so a late hide can never
//! blank out a newer notice. `AutoHide` also keeps at most one pending timer.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageRegion {
    pub notice: Option<Notice>,
    pub visible: bool,
    pub generation: u64,
}

impl MessageRegion {
    /// Class attribute of the region: the notice kind plus `hidden`.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if let Some(notice) = &self.notice {
            classes.push(notice.kind.class());
        }
        if !self.visible {
            classes.push("hidden");
        }
        classes
    }

    pub fn text(&self) -> &str {
        self.notice.as_ref().map(|n| n.text.as_str()).unwrap_or_default()
    }
}

pub enum MessageAction {
    Show { notice: Notice, generation: u64 },
    Hide { generation: u64 },
}

impl Reducible for MessageRegion {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MessageAction::Show { notice, generation } => Rc::new(MessageRegion {
                notice: Some(notice),
                visible: true,
                generation,
            }),
            MessageAction::Hide { generation } if generation == self.generation && self.visible => {
                Rc::new(MessageRegion {
                    notice: self.notice.clone(),
                    visible: false,
                    generation,
                })
            }
            MessageAction::Hide { .. } => self,
        }
    }
}

/// Starts a one-shot timer; dropping the returned handle cancels it.
pub trait Schedule {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `gloo::timers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimers;

impl Schedule for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Single cancel-and-reschedule hide timer for the message region.
pub struct AutoHide<S: Schedule = GlooTimers> {
    scheduler: S,
    delay_ms: u32,
    issued: u64,
    // Only held so that dropping it cancels the timer.
    #[allow(dead_code)]
    pending: Option<S::Handle>,
}

impl<S: Schedule> AutoHide<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            issued: 0,
            pending: None,
        }
    }

    /// Allocates the next generation and arms the hide for it, replacing
    /// (and so cancelling) any pending timer.
    pub fn arm<F>(&mut self, on_hide: F) -> u64
    where
        F: FnOnce(u64) + 'static,
    {
        self.issued += 1;
        let generation = self.issued;
        self.pending = None;
        self.pending = Some(
            self.scheduler
                .schedule(self.delay_ms, Box::new(move || on_hide(generation))),
        );
        generation
    }
}
