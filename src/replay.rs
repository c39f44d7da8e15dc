// SPDX-License-Identifier: MPL-2.0
//! Text form of gesture events, used by the headless host to replay a
//! session from the command line.
//!
//! | Token          | Zoom                     | Onboarding              |
//! |----------------|--------------------------|-------------------------|
//! | `double-tap`   | `DoubleTap`              | -                       |
//! | `drag:X,Y`     | `DragChanged((X, Y))`    | -                       |
//! | `drag:X`       | -                        | slide `DragChanged(X)`  |
//! | `drag-end`     | `DragEnded`              | slide `DragEnded`       |
//! | `step-up`      | `ScaleStepUp`            | -                       |
//! | `step-down`    | `ScaleStepDown`          | -                       |
//! | `reset`        | `Reset`                  | -                       |
//! | `restart`      | -                        | `Restart`               |

use crate::error::{Error, Result};
use crate::gesture::Offset;
use crate::onboarding::flow::{self, OnboardingFlow};
use crate::onboarding::{slide_confirm, FlagStore, SoundPlayer};
use crate::pinch::info_panel::{format_number, readout};
use crate::pinch::zoom_pan::{self, ZoomPanController};

fn parse_number(token: &str, raw: &str) -> Result<f32> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| Error::InvalidEvent(format!("{token}: '{raw}' is not a number")))
}

pub fn parse_zoom_event(token: &str) -> Result<zoom_pan::Message> {
    match token {
        "double-tap" => Ok(zoom_pan::Message::DoubleTap),
        "drag-end" => Ok(zoom_pan::Message::DragEnded),
        "step-up" => Ok(zoom_pan::Message::ScaleStepUp),
        "step-down" => Ok(zoom_pan::Message::ScaleStepDown),
        "reset" => Ok(zoom_pan::Message::Reset),
        _ => {
            let args = token
                .strip_prefix("drag:")
                .ok_or_else(|| Error::InvalidEvent(format!("unknown zoom event '{token}'")))?;
            let (x, y) = args
                .split_once(',')
                .ok_or_else(|| Error::InvalidEvent(format!("{token}: expected drag:X,Y")))?;
            Ok(zoom_pan::Message::DragChanged(Offset::new(
                parse_number(token, x)?,
                parse_number(token, y)?,
            )))
        }
    }
}

pub fn parse_onboarding_event(token: &str) -> Result<flow::Message> {
    match token {
        "drag-end" => Ok(flow::Message::Slide(slide_confirm::Message::DragEnded)),
        "restart" => Ok(flow::Message::Restart),
        _ => {
            let raw = token.strip_prefix("drag:").ok_or_else(|| {
                Error::InvalidEvent(format!("unknown onboarding event '{token}'"))
            })?;
            Ok(flow::Message::Slide(slide_confirm::Message::DragChanged(
                parse_number(token, raw)?,
            )))
        }
    }
}

/// Feeds every token to the controller and describes the state after each.
///
/// All tokens are parsed before the first one is applied.
pub fn replay_zoom<S: AsRef<str>>(
    controller: &mut ZoomPanController,
    tokens: &[S],
) -> Result<Vec<String>> {
    let messages = tokens
        .iter()
        .map(|token| parse_zoom_event(token.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(tokens
        .iter()
        .zip(messages)
        .map(|(token, msg)| {
            let token: &str = token.as_ref();
            controller.handle(msg);
            let r = readout(&controller.state());
            format!(
                "{:<12} scale={} offset=({}, {}) {:?}",
                token,
                r.scale,
                r.width,
                r.height,
                controller.phase()
            )
        })
        .collect())
}

/// Onboarding counterpart of [`replay_zoom`].
pub fn replay_onboarding<S, P, T>(
    host: &mut OnboardingFlow<S, P>,
    tokens: &[T],
) -> Result<Vec<String>>
where
    S: FlagStore,
    P: SoundPlayer,
    T: AsRef<str>,
{
    let messages = tokens
        .iter()
        .map(|token| parse_onboarding_event(token.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(tokens
        .iter()
        .zip(messages)
        .map(|(token, msg)| {
            let token: &str = token.as_ref();
            host.handle(msg);
            match host.slide() {
                Some(slide) => format!(
                    "{:<12} screen={:?} handle={} {:?}",
                    token,
                    host.screen(),
                    format_number(slide.handle_offset()),
                    slide.phase()
                ),
                None => format!("{:<12} screen={:?}", token, host.screen()),
            }
        })
        .collect())
}
