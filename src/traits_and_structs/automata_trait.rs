use super::edge_mode::EdgeMode;

/// A two-state automaton that can be advanced and drawn one generation at a time.
pub trait CellAutomata: Sized + Clone {
    /// The following generation. `self` is left untouched.
    fn next_generation(&self, edge_mode: EdgeMode) -> Self;
    /// Number of live cells.
    fn population(&self) -> usize;
    /// Writes one RGBA pixel per cell into `screen`.
    fn draw(&self, screen: &mut [u8]);
    fn describe() -> String;
}
