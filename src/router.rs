//! Named-route stack for the app's pages.
//!
//! Mirrors a mobile navigation stack: `navigate` pushes a route by name,
//! `back` pops it. The navigation slider talks to this through
//! `SelectionSink::navigate`.

use crate::error::{NavigationError, NavigationResult};

/// Pages the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Travel,
    Flights,
    Hotels,
    Beauty,
    Events,
    Rentals,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Travel,
        Route::Flights,
        Route::Hotels,
        Route::Beauty,
        Route::Events,
        Route::Rentals,
        Route::NotFound,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Travel => "Travel",
            Route::Flights => "Flights",
            Route::Hotels => "Hotels",
            Route::Beauty => "Beauty",
            Route::Events => "Events",
            Route::Rentals => "Rentals",
            Route::NotFound => "NotFound",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.name() == name)
    }

    /// One-line description shown in the page body
    pub fn tagline(self) -> &'static str {
        match self {
            Route::Home => "Featured events and services",
            Route::Travel => "Trips and getaways",
            Route::Flights => "Departures and deals",
            Route::Hotels => "Places to stay",
            Route::Beauty => "Salons, spas and treatments",
            Route::Events => "Concerts, shows and nightlife",
            Route::Rentals => "Cars and apartments",
            Route::NotFound => "This page does not exist",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push the route named `name`.
    ///
    /// Navigating to the current route is a successful no-op. Returns whether
    /// the current route changed.
    pub fn navigate(&mut self, name: &str) -> NavigationResult<bool> {
        let route = Route::from_name(name).ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;
        if route == self.current() {
            return Ok(false);
        }
        self.stack.push(route);
        Ok(true)
    }

    /// Pop back to the previous route.
    pub fn back(&mut self) -> NavigationResult<Route> {
        if self.stack.len() <= 1 {
            return Err(NavigationError::AtRoot);
        }
        self.stack.pop();
        Ok(self.current())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
