// SPDX-License-Identifier: MPL-2.0
use iced_sift::app::{self, Flags};

fn main() -> iced::Result {
    let args = pico_args::Arguments::from_env();

    let flags = Flags {
        start_directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
