use raylib::prelude::*;
use crate::error::SurfaceError;

/// The host's display mode capabilities.
///
/// Requests are fire-and-forget from the deck's point of view: a refusal is
/// reported here but the deck keeps the mode it asked for.
pub trait DisplaySurface {
    fn enter_fullscreen(&mut self) -> Result<(), SurfaceError>;
    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError>;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn enter_fullscreen(&mut self) -> Result<(), SurfaceError> {
        (**self).enter_fullscreen()
    }

    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError> {
        (**self).exit_fullscreen()
    }
}

impl DisplaySurface for RaylibHandle {
    fn enter_fullscreen(&mut self) -> Result<(), SurfaceError> {
        if !self.is_window_fullscreen() {
            self.toggle_fullscreen();
        }
        if self.is_window_fullscreen() {
            Ok(())
        } else {
            Err(SurfaceError::Refused("window is still windowed".to_string()))
        }
    }

    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError> {
        if self.is_window_fullscreen() {
            self.toggle_fullscreen();
        }
        if self.is_window_fullscreen() {
            Err(SurfaceError::Refused("window is still fullscreen".to_string()))
        } else {
            Ok(())
        }
    }
}
