//! UI module for rendering the terminal landing page

mod benefits;
mod components;
mod field_renderer;
mod hero;
mod layout;
mod page;
mod signup;
mod testimonials;

pub use layout::SIGNUP_HEIGHT;
pub use page::line_count as page_line_count;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (page_area, signup_area) = layout::create_layout(frame.area());

    page::draw(frame, page_area, app);
    signup::draw(frame, signup_area, app);
    layout::draw_status_bar(frame, app);
}
