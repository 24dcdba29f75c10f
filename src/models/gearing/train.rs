//! Gear trains: ordered placements compounded into a net ratio.

mod error;

pub use error::{CapacityError, DegenerateTrainError};

use uom::si::{
    f64::{Angle, Ratio},
    ratio::ratio,
};

use super::gear::Gear;

/// One stage of a gear train.
///
/// The placement at index 0 holds the train's input gear; it is represented
/// as [`Placement::Meshed`] but meshes with nothing and only seeds the
/// driving role. Every later placement entered the train by meshing its
/// input gear against the placement before it.
#[derive(Debug, Clone)]
pub enum Placement {
    /// A single gear, meshed against the preceding placement.
    Meshed(Gear),
    /// Two gears locked to one shaft: `input` meshes against the preceding
    /// placement and `output` drives the next one. Rotation crosses the
    /// shaft at ratio one and without a direction reversal.
    Coaxial { input: Gear, output: Gear },
}

impl Placement {
    /// The gear that receives rotation from the preceding placement.
    #[must_use]
    pub fn input_gear(&self) -> &Gear {
        match self {
            Self::Meshed(gear) => gear,
            Self::Coaxial { input, .. } => input,
        }
    }

    /// The gear that passes rotation on to the next placement.
    #[must_use]
    pub fn output_gear(&self) -> &Gear {
        match self {
            Self::Meshed(gear) => gear,
            Self::Coaxial { output, .. } => output,
        }
    }

    #[must_use]
    pub fn is_coaxial(&self) -> bool {
        matches!(self, Self::Coaxial { .. })
    }
}

/// An ordered chain of gears transmitting rotation from a first gear to a
/// last through meshed and coaxial stages.
///
/// A train grows only by appending, and its net ratio is recomputed from
/// scratch after every structural change, so the reported ratio is always
/// consistent with the placement sequence at the moment it is read.
///
/// # Examples
///
/// ```
/// use transmission_models::models::gearing::{Gear, GearTrain};
/// use uom::si::ratio::ratio;
///
/// let mut train = GearTrain::new(Gear::new(10.0).unwrap());
/// train.append_meshed(Gear::new(20.0).unwrap());
/// train.append_meshed(Gear::new(40.0).unwrap());
///
/// // The 20-tooth gear is an idler: it reverses direction a second time but
/// // cancels out of the ratio.
/// assert_eq!(train.net_ratio().unwrap().get::<ratio>(), 4.0);
/// assert!(!train.direction_flipped());
/// ```
#[derive(Debug, Clone)]
pub struct GearTrain {
    placements: Vec<Placement>,
    net_ratio: Ratio,
    direction_flipped: bool,
}

impl GearTrain {
    /// Creates a train holding only its input gear.
    #[must_use]
    pub fn new(input_gear: Gear) -> Self {
        Self {
            placements: vec![Placement::Meshed(input_gear)],
            net_ratio: Ratio::new::<ratio>(1.0),
            direction_flipped: false,
        }
    }

    /// Appends a gear meshed against the last placement.
    ///
    /// Each external mesh reverses rotational direction, so this toggles
    /// [`direction_flipped`](Self::direction_flipped).
    pub fn append_meshed(&mut self, gear: Gear) {
        self.placements.push(Placement::Meshed(gear));
        self.recompute();
    }

    /// Locks `gear` onto the same shaft as the last placement's gear.
    ///
    /// No mesh occurs, so the direction flip is untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if the last placement already holds a
    /// coaxial pair, or if the train still consists of only its input
    /// placement. A failed append leaves the train unchanged.
    pub fn append_coaxial(&mut self, gear: Gear) -> Result<(), CapacityError> {
        if self.placements.len() < 2 {
            return Err(CapacityError::InputPlacement);
        }

        let index = self.placements.len() - 1;
        match self.placements.pop() {
            Some(Placement::Meshed(input)) => {
                self.placements.push(Placement::Coaxial {
                    input,
                    output: gear,
                });
                self.recompute();
                Ok(())
            }
            Some(pair @ Placement::Coaxial { .. }) => {
                self.placements.push(pair);
                Err(CapacityError::PairFull { index })
            }
            None => unreachable!("a gear train always holds its input placement"),
        }
    }

    /// The compounded speed ratio from the train's first gear to its last.
    ///
    /// # Errors
    ///
    /// Returns a [`DegenerateTrainError`] if the train holds fewer than two
    /// placements, since no mesh exists yet.
    pub fn net_ratio(&self) -> Result<Ratio, DegenerateTrainError> {
        if self.placements.len() < 2 {
            return Err(DegenerateTrainError {
                placements: self.placements.len(),
            });
        }
        Ok(self.net_ratio)
    }

    /// Whether the last gear turns opposite to the first.
    #[must_use]
    pub fn direction_flipped(&self) -> bool {
        self.direction_flipped
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The delta seen at the train's last gear when the first gear moves by
    /// `input_delta`.
    ///
    /// # Errors
    ///
    /// Returns a [`DegenerateTrainError`] if the train has no mesh yet.
    pub fn output_delta_for(&self, input_delta: Angle) -> Result<Angle, DegenerateTrainError> {
        Ok((input_delta / self.net_ratio()?).into())
    }

    /// The delta the train's first gear must move by for the last gear to
    /// move by `output_delta`.
    ///
    /// # Errors
    ///
    /// Returns a [`DegenerateTrainError`] if the train has no mesh yet.
    pub fn input_delta_for(&self, output_delta: Angle) -> Result<Angle, DegenerateTrainError> {
        Ok((output_delta * self.net_ratio()?).into())
    }

    /// Recomputes the net ratio and direction flip from the placement
    /// sequence.
    ///
    /// One ratio is recorded per handoff between two distinct driving gears:
    /// at each coaxial pair (the driver meshes the pair's input gear and the
    /// pair's output gear takes over the driving role) and at a final meshed
    /// placement. Interior meshed gears are idlers; their teeth cancel out
    /// of the compounded ratio, so only the direction parity sees them.
    fn recompute(&mut self) {
        let last = self.placements.len() - 1;
        let mut driver = self.placements[0].output_gear();
        let mut net_ratio = Ratio::new::<ratio>(1.0);

        for (index, placement) in self.placements.iter().enumerate().skip(1) {
            match placement {
                Placement::Coaxial { input, output } => {
                    net_ratio = net_ratio * driver.ratio_to(input);
                    driver = output;
                }
                Placement::Meshed(gear) if index == last => {
                    net_ratio = net_ratio * driver.ratio_to(gear);
                }
                Placement::Meshed(_) => {}
            }
        }

        self.net_ratio = net_ratio;
        // Every placement past the input entered through exactly one mesh.
        self.direction_flipped = (self.placements.len() - 1) % 2 == 1;
    }
}
