/// Odometer over positions in [`OPERATOR_ORDER`](super::OPERATOR_ORDER).
///
/// The last position turns fastest, which makes the sequence of states a
/// depth-first pre-order walk of the operator tree.
#[derive(Debug, Clone)]
pub struct OdometerState {
    pub(crate) digits: Vec<usize>,
    pub(crate) radix: usize,
    pub(crate) exhausted: bool,
}

impl OdometerState {
    pub fn new(width: usize, radix: usize) -> Self {
        Self {
            digits: vec![0; width],
            radix,
            exhausted: false,
        }
    }

    /// Step to the next state, marking the odometer exhausted on overflow
    pub fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return;
            }
            *digit = 0;
        }
        self.mark_exhausted();
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
