//! Boundary to whatever draws a planned trip.

use crate::TripPlan;

/// Turn a [`TripPlan`] into a visual artefact.
///
/// The planner never inspects the output; renderers are free to produce
/// map documents, images or anything else.
pub trait MapRenderer {
    /// Artefact produced by the renderer.
    type Output;
    /// Failure raised while rendering.
    type Error;

    /// Render `plan`.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures through [`Self::Error`].
    fn render(&self, plan: &TripPlan) -> Result<Self::Output, Self::Error>;
}
