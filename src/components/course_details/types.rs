// Page-local state types for the course detail view.

/// Payment-loading flag shared between the purchase flow and every page that must block on it.
#[derive(Clone, Copy)]
pub struct PaymentLoadingSignal(pub Signal<bool>);

/// Raises the payment-loading flag and lowers it again when dropped.
///
/// A purchase task is dropped together with the page that spawned it, so the
/// flag is cleared on unmount as well as on completion.
pub struct PaymentGuard {
    flag: Signal<bool>,
}

impl PaymentGuard {
    pub fn begin(mut flag: Signal<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for PaymentGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Section ids whose lecture lists are currently open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections {
    ids: HashSet<String>,
}

impl ExpandedSections {
    pub fn toggle(&mut self, section_id: &str) {
        if !self.ids.remove(section_id) {
            self.ids.insert(section_id.to_string());
        }
    }

    pub fn collapse_all(&mut self) {
        self.ids.clear();
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.ids.contains(section_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Identifies one issued course-details request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    course_id: String,
    generation: u64,
}

impl RequestTicket {
    pub fn course_id(&self) -> &str {
        &self.course_id
    }
}

/// Tracks the latest issued request so late responses for older ids are dropped on commit.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    current: Option<RequestTicket>,
    next_generation: u64,
}

impl RequestTracker {
    pub fn begin(&mut self, course_id: &str) -> RequestTicket {
        self.next_generation += 1;
        let ticket = RequestTicket {
            course_id: course_id.to_string(),
            generation: self.next_generation,
        };
        self.current = Some(ticket.clone());
        ticket
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.current.as_ref() == Some(ticket)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseState {
    Pending,
    Received(FetchResult),
}

/// Which top-level view the page shows, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<'a> {
    Loading,
    Error(Option<&'a str>),
    PaymentInFlight,
    Loaded(&'a CourseDetailsPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    NavigateToLogin,
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub text1: String,
    pub text2: String,
    pub btn1_text: String,
    pub btn2_text: String,
    pub btn1_action: ModalAction,
    pub btn2_action: ModalAction,
}

impl ConfirmationRequest {
    pub fn login_required() -> Self {
        Self {
            text1: "You are not logged in!".to_string(),
            text2: "Please login to Purchase Course.".to_string(),
            btn1_text: "Login".to_string(),
            btn2_text: "Cancel".to_string(),
            btn1_action: ModalAction::NavigateToLogin,
            btn2_action: ModalAction::Dismiss,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseAction {
    Buy(PurchaseRequest),
    RequireLogin(ConfirmationRequest),
}
