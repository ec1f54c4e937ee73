//! Generated pages.

use rand::Rng;

/// Rolls a twenty-sided die.
pub fn roll_d20() -> u8 {
    rand::thread_rng().gen_range(1..=20)
}

/// Renders the `/d20` page for a given roll.
pub fn render_d20(roll: u8) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>d20</title></head>\n\
         <body>\n\
         <h1>Random Number Generator</h1>\n\
         <p>The random number generated is: {roll}</p>\n\
         </body>\n\
         </html>\n"
    )
}
