//! Модальный просмотрщик галереи как явная машина состояний.
//!
//! ```text
//!            Open(i)                 ProbeLoaded(t)
//!  Closed ───────────▶ Loading(i) ──────────────────▶ Shown(i)
//!    ▲                   │   ▲                          │
//!    │                   │   └──────── Open(j) ─────────┤
//!    │                   │ ProbeFailed(t)               │
//!    │                   ▼                              │
//!    └──── Close / Escape / OverlayClick ── Error(i) ◀───┘
//! ```
//!
//! Каждая проба изображения помечается [`ProbeTicket`]. Результат пробы
//! применяется только если билет совпадает с ожидаемым; поздние ответы после
//! закрытия или переключения на другую работу отбрасываются.

use crate::domain::a001_artwork::Artwork;

/// Метка конкретной пробы изображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeTicket {
    generation: u64,
    index: usize,
}

impl ProbeTicket {
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Loading {
        ticket: ProbeTicket,
    },
    Shown {
        index: usize,
    },
    Error {
        index: usize,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Индекс в полном каталоге; есть только пока окно открыто
    pub fn current_index(&self) -> Option<usize> {
        match self {
            ModalState::Closed => None,
            ModalState::Loading { ticket } => Some(ticket.index),
            ModalState::Shown { index } | ModalState::Error { index } => Some(*index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open(usize),
    ProbeLoaded(ProbeTicket),
    ProbeFailed(ProbeTicket),
    Close,
    Escape,
    OverlayClick,
}

/// Запрос на загрузку изображения вне экрана
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub ticket: ProbeTicket,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    AlreadyClosed,
    IndexOutOfRange { index: usize, len: usize },
    StaleProbe(ProbeTicket),
}

/// Результат обработки события
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Окно в состоянии загрузки; хост должен запустить пробу
    StartProbe(ProbeRequest),
    /// Результат пробы применён
    Committed,
    /// Окно закрыто, блокировку прокрутки нужно снять
    Closed,
    Ignored(Ignored),
}

#[derive(Debug, Clone, Default)]
pub struct ModalMachine {
    state: ModalState,
    next_generation: u64,
}

impl ModalMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Флаг блокировки прокрутки страницы совпадает с видимостью окна
    pub fn scroll_locked(&self) -> bool {
        self.state.is_open()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    pub fn handle(&mut self, event: ModalEvent, images: &[Artwork]) -> Transition {
        match event {
            ModalEvent::Open(index) => self.open(index, images),
            ModalEvent::ProbeLoaded(ticket) => self.settle(ticket, true),
            ModalEvent::ProbeFailed(ticket) => self.settle(ticket, false),
            ModalEvent::Close | ModalEvent::Escape | ModalEvent::OverlayClick => self.close(),
        }
    }

    fn open(&mut self, index: usize, images: &[Artwork]) -> Transition {
        let Some(artwork) = images.get(index) else {
            return Transition::Ignored(Ignored::IndexOutOfRange {
                index,
                len: images.len(),
            });
        };
        self.next_generation += 1;
        let ticket = ProbeTicket {
            generation: self.next_generation,
            index,
        };
        self.state = ModalState::Loading { ticket };
        Transition::StartProbe(ProbeRequest {
            ticket,
            url: artwork.image.clone(),
        })
    }

    fn settle(&mut self, ticket: ProbeTicket, loaded: bool) -> Transition {
        match self.state {
            ModalState::Loading { ticket: pending } if pending == ticket => {
                self.state = if loaded {
                    ModalState::Shown {
                        index: ticket.index,
                    }
                } else {
                    ModalState::Error {
                        index: ticket.index,
                    }
                };
                Transition::Committed
            }
            _ => Transition::Ignored(Ignored::StaleProbe(ticket)),
        }
    }

    fn close(&mut self) -> Transition {
        if !self.state.is_open() {
            return Transition::Ignored(Ignored::AlreadyClosed);
        }
        self.state = ModalState::Closed;
        Transition::Closed
    }
}

/// Тексты и ресурсы, которые показывает окно вне состояния `Shown`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalTexts {
    pub loading_title: String,
    pub error_title: String,
    pub error_description: String,
    pub error_alt: String,
    pub placeholder_image: String,
}

/// Что сейчас отображает окно
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub visible: bool,
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub image_style: &'static str,
}

const STYLE_LOADING: &str = "opacity: 0.3;";
const STYLE_SHOWN: &str = "opacity: 1; transition: opacity 0.3s ease-in-out;";
const STYLE_ERROR: &str = "opacity: 1;";

impl ModalView {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            image_src: String::new(),
            image_alt: String::new(),
            title: String::new(),
            description: String::new(),
            image_style: STYLE_LOADING,
        }
    }

    pub fn render(state: ModalState, images: &[Artwork], texts: &ModalTexts) -> Self {
        let artwork = state.current_index().and_then(|i| images.get(i));
        match (state, artwork) {
            (ModalState::Loading { .. }, Some(_)) => Self {
                visible: true,
                image_src: String::new(),
                image_alt: String::new(),
                title: texts.loading_title.clone(),
                description: String::new(),
                image_style: STYLE_LOADING,
            },
            (ModalState::Shown { .. }, Some(artwork)) => Self {
                visible: true,
                image_src: artwork.image.clone(),
                image_alt: artwork.title.clone(),
                title: artwork.title.clone(),
                description: artwork.description.clone(),
                image_style: STYLE_SHOWN,
            },
            (ModalState::Error { .. }, Some(_)) => Self {
                visible: true,
                image_src: texts.placeholder_image.clone(),
                image_alt: texts.error_alt.clone(),
                title: texts.error_title.clone(),
                description: texts.error_description.clone(),
                image_style: STYLE_ERROR,
            },
            _ => Self::hidden(),
        }
    }
}
