//! # Session
//!
//! One shopper's session: state, current screen, and command dispatch.

use storefront_catalog::{CatalogResult, CatalogSnapshot};
use tracing::debug;

use crate::commands::{cart, catalog, checkout};
use crate::error::AppResult;
use crate::screens::{self, Screen};
use crate::shell::{ShellCommand, HELP};
use crate::state::{CartSession, CatalogState, ConfigState};

/// Session state plus the screen being shown.
#[derive(Debug, Default)]
pub struct Session {
    config: ConfigState,
    catalog: CatalogState,
    cart: CartSession,
    screen: Screen,
}

impl Session {
    /// Starts on the Home screen with the catalog still loading.
    pub fn new(config: ConfigState) -> Self {
        Session {
            config,
            catalog: CatalogState::new(),
            cart: CartSession::new(),
            screen: Screen::Home,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn cart(&self) -> &CartSession {
        &self.cart
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Records the catalog fetch and returns the text to show for it.
    ///
    /// A failure is reported here and nowhere else; the catalog stays in
    /// its loading state.
    pub fn catalog_arrived(&mut self, result: CatalogResult<CatalogSnapshot>) -> String {
        match self.catalog.apply(result) {
            Ok(()) => {
                let notice = format!("Catalog loaded: {} products.", self.catalog.products().len());
                if self.screen == Screen::Home {
                    match self.render() {
                        Ok(home) => format!("{}\n{}", notice, home),
                        Err(e) => format!("{}\nError: {}", notice, e.message),
                    }
                } else {
                    notice
                }
            }
            Err(e) => format!("Could not load the catalog: {}", e.message),
        }
    }

    /// Runs one command and returns the text to print.
    pub fn execute(&mut self, command: ShellCommand) -> AppResult<String> {
        debug!(?command, "Executing shell command");

        match command {
            ShellCommand::Home => {
                self.screen = Screen::Home;
                self.render()
            }
            ShellCommand::Categories => Ok(screens::render_categories(
                &catalog::list_categories(&self.catalog),
                self.catalog.selected_category(),
            )),
            ShellCommand::Filter(category) => {
                catalog::select_category(&mut self.catalog, category.as_deref())?;
                self.screen = Screen::Home;
                self.render()
            }
            ShellCommand::Show(id) => {
                let detail = catalog::product_detail(&self.catalog, &self.cart, &id)?;
                self.screen = Screen::ProductDetail(detail.product.id.clone());
                Ok(screens::render_product_detail(
                    &self.config,
                    &detail,
                    self.cart.badge(),
                ))
            }
            ShellCommand::Add(id) => {
                cart::add_to_cart(&self.catalog, &mut self.cart, &id)?;
                self.after_cart_change()
            }
            ShellCommand::Increase(id) => {
                cart::increase_quantity(&mut self.cart, &id)?;
                self.after_cart_change()
            }
            ShellCommand::Decrease(id) => {
                cart::decrease_quantity(&mut self.cart, &id)?;
                self.after_cart_change()
            }
            ShellCommand::Remove(id) => {
                cart::remove_from_cart(&mut self.cart, &id)?;
                self.after_cart_change()
            }
            ShellCommand::Cart => {
                self.screen = Screen::Cart;
                self.render()
            }
            ShellCommand::Clear => {
                cart::clear_cart(&mut self.cart);
                self.after_cart_change()
            }
            ShellCommand::Buy => {
                let confirmation = checkout::place_order(&mut self.cart)?;
                self.screen = Screen::OrderConfirmation(confirmation);
                self.render()
            }
            ShellCommand::Help => Ok(HELP.to_string()),
            ShellCommand::Quit => Ok("Goodbye.".to_string()),
        }
    }

    /// Renders the current screen from current state.
    pub fn render(&self) -> AppResult<String> {
        let badge = self.cart.badge();

        match &self.screen {
            Screen::Home => Ok(screens::render_home(
                &self.config,
                &catalog::list_products(&self.catalog),
                badge,
            )),
            Screen::ProductDetail(id) => {
                let detail = catalog::product_detail_by_id(&self.catalog, &self.cart, id)?;
                Ok(screens::render_product_detail(&self.config, &detail, badge))
            }
            Screen::Cart => Ok(screens::render_cart(&self.config, &cart::get_cart(&self.cart))),
            Screen::OrderConfirmation(confirmation) => {
                Ok(screens::render_confirmation(&self.config, confirmation))
            }
        }
    }

    /// Cart changes keep the current screen, except that a finished order
    /// gives way to the cart.
    fn after_cart_change(&mut self) -> AppResult<String> {
        if matches!(self.screen, Screen::OrderConfirmation(_)) {
            self.screen = Screen::Cart;
        }
        self.render()
    }
}
