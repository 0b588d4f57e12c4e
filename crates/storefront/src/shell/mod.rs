//! Screen state machine.
//!
//! [`Shell`] owns the current [`Screen`] and the optional [`Session`], calls
//! the services for each user action, and turns every result into a
//! [`Notification`] plus a screen transition. It does no I/O of its own; the
//! [`terminal`] front-end renders screens and collects input.
//!
//! Screens: login ⇄ register, login → dashboard ⇄ {contact, messages, orders}.

pub mod terminal;

use secrecy::SecretString;
use tracing::info;

use carshop_core::{CarId, OrderType};

use crate::error::{AppError, ErrorKind};
use crate::models::{Car, MessageEntry, OrderSummary, Session};
use crate::services::{AuthService, RegisterRequest};
use crate::state::AppState;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
    Contact,
    /// Admin-only message list.
    Messages,
    /// The logged-in user's orders.
    Orders,
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A blocking message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notification {
    fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            title: title.to_owned(),
            message: message.into(),
        }
    }

    /// Build the notification for a failed action and log it.
    fn failure(err: impl Into<AppError>) -> Self {
        let err = err.into();
        err.log();

        let (level, title) = match err.kind() {
            ErrorKind::Validation => (Level::Warning, "Input Error"),
            ErrorKind::Forbidden => (Level::Warning, "Not Allowed"),
            ErrorKind::Unavailable => (Level::Warning, "Unavailable"),
            ErrorKind::Auth => (Level::Error, "Login Failed"),
            ErrorKind::Conflict | ErrorKind::NotFound | ErrorKind::Store => (Level::Error, "Error"),
        };

        Self {
            level,
            title: title.to_owned(),
            message: err.user_message(),
        }
    }
}

/// Front-end state: current screen and session.
pub struct Shell {
    state: AppState,
    screen: Screen,
    session: Option<Session>,
}

impl Shell {
    /// Start on the login screen with no session.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self {
            state,
            screen: Screen::Login,
            session: None,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn require_session(&self) -> Result<&Session, AppError> {
        self.session.as_ref().ok_or(AppError::NotLoggedIn)
    }

    pub fn show_register(&mut self) {
        self.screen = Screen::Register;
    }

    pub fn show_login(&mut self) {
        self.screen = Screen::Login;
    }

    /// Attempt a login. On success the dashboard is shown and nothing is reported.
    pub async fn login(&mut self, username: &str, password: &SecretString) -> Option<Notification> {
        let result = self.state.auth().login(username, password).await;
        match result {
            Ok(session) => {
                self.session = Some(session);
                self.screen = Screen::Dashboard;
                None
            }
            Err(err) => Some(Notification::failure(err)),
        }
    }

    /// Attempt a registration. On success the login screen is shown.
    pub async fn register(&mut self, request: &RegisterRequest) -> Notification {
        let result = self.state.auth().register(request).await;
        match result {
            Ok(_) => {
                self.screen = Screen::Login;
                Notification::info("Success", "Registered successfully! You can now login.")
            }
            Err(err) => Notification::failure(err),
        }
    }

    /// Drop the session and return to the login screen.
    pub fn logout(&mut self) {
        AuthService::logout(&mut self.session);
        self.screen = Screen::Login;
    }

    /// Cars for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns the notification to show if the inventory cannot be read.
    pub async fn cars(&self) -> Result<Vec<Car>, Notification> {
        self.state
            .catalog()
            .list_cars()
            .await
            .map_err(Notification::failure)
    }

    /// Place an order for the logged-in user. The dashboard stays open.
    pub async fn place_order(&self, car_id: CarId, order_type: OrderType) -> Notification {
        let session = match self.require_session() {
            Ok(session) => session,
            Err(err) => return Notification::failure(err),
        };

        match self
            .state
            .catalog()
            .place_order(session, car_id, order_type)
            .await
        {
            Ok(order) => Notification::info(
                "Success",
                format!(
                    "Your {} order has been placed successfully!",
                    order.order_type
                ),
            ),
            Err(err) => Notification::failure(err),
        }
    }

    pub fn show_contact(&mut self) {
        if self.session.is_some() {
            self.screen = Screen::Contact;
        }
    }

    /// Send a contact message. On success the dashboard is shown again.
    pub async fn send_message(&mut self, body: &str) -> Notification {
        let session = match self.require_session() {
            Ok(session) => session,
            Err(err) => return Notification::failure(err),
        };

        let result = self.state.messaging().send(session, body).await;
        match result {
            Ok(_) => {
                self.screen = Screen::Dashboard;
                Notification::info("Thank you", "Your message has been sent successfully!")
            }
            Err(err) => Notification::failure(err),
        }
    }

    /// Open the message list. Only admins get there.
    pub fn show_messages(&mut self) -> Option<Notification> {
        match self.session.as_ref() {
            Some(session) if session.is_admin() => {
                self.screen = Screen::Messages;
                None
            }
            Some(_) => Some(Notification::failure(
                crate::services::MessageError::Forbidden,
            )),
            None => Some(Notification::failure(AppError::NotLoggedIn)),
        }
    }

    /// Every message, for the messages screen.
    ///
    /// # Errors
    ///
    /// Returns the notification to show if the list cannot be read.
    pub async fn messages(&self) -> Result<Vec<MessageEntry>, Notification> {
        let session = self.require_session().map_err(Notification::failure)?;
        self.state
            .messaging()
            .list_all(session)
            .await
            .map_err(Notification::failure)
    }

    pub fn show_orders(&mut self) {
        if self.session.is_some() {
            self.screen = Screen::Orders;
        }
    }

    /// The logged-in user's orders.
    ///
    /// # Errors
    ///
    /// Returns the notification to show if the list cannot be read.
    pub async fn orders(&self) -> Result<Vec<OrderSummary>, Notification> {
        let session = self.require_session().map_err(Notification::failure)?;
        self.state
            .catalog()
            .list_orders(session)
            .await
            .map_err(Notification::failure)
    }

    pub fn back_to_dashboard(&mut self) {
        if self.session.is_some() {
            self.screen = Screen::Dashboard;
        } else {
            self.screen = Screen::Login;
        }
    }

    /// Close the database before exit.
    pub async fn shutdown(self) {
        info!("Shutting down");
        self.state.close().await;
    }
}
