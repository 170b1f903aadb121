use alloc::collections::VecDeque;

use log::debug;

use super::EstimatorError;
use crate::traits::FloatScalar;

/// Moving-average low-pass filter over a bounded window of samples.
///
/// The output is the mean of the samples currently held, which is fewer
/// than `window_size` until the window fills. A window of 1 is a
/// passthrough and keeps no samples at all.
///
/// The buffer capacity is reserved at construction, so [`get`](Self::get)
/// never allocates. Only [`set_window_size`](Self::set_window_size) may.
///
/// # Example
///
/// ```
/// use balltrack::estimate::LowPassFilter;
///
/// let mut f = LowPassFilter::<f64>::new(4).unwrap();
/// for v in [0.0, 1.0, 2.0, 3.0, 4.0] {
///     f.get(v);
/// }
/// assert_eq!(f.get(5.0), (2.0 + 3.0 + 4.0 + 5.0) / 4.0);
/// ```
///
/// With the `serde` feature, a deserialized filter is validated like a new
/// one: the window must be at least 1 and hold no more samples than it
/// allows. The stored sum is ignored and recomputed from the samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LowPassFilter<T> {
    window_size: usize,
    buffer: VecDeque<T>,
    sum: T,
}

/// Serialized form of a [`LowPassFilter`], checked before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LowPassFilterCheckpoint<T> {
    window_size: usize,
    buffer: VecDeque<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LowPassFilter<T>
where
    T: FloatScalar + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let LowPassFilterCheckpoint {
            window_size,
            mut buffer,
        } = LowPassFilterCheckpoint::deserialize(deserializer)?;
        if window_size == 0 {
            return Err(serde::de::Error::custom(
                EstimatorError::InvalidConfiguration,
            ));
        }
        if buffer.len() > window_size {
            return Err(serde::de::Error::custom(
                "filter holds more samples than its window size",
            ));
        }
        buffer.reserve(window_size - buffer.len());
        let sum = sum_of(&buffer);
        Ok(Self {
            window_size,
            buffer,
            sum,
        })
    }
}

fn sum_of<T: FloatScalar>(buffer: &VecDeque<T>) -> T {
    buffer.iter().fold(T::zero(), |acc, &v| acc + v)
}

impl<T: FloatScalar> LowPassFilter<T> {
    /// Create a filter averaging over the last `window_size` samples.
    ///
    /// Returns [`EstimatorError::InvalidConfiguration`] if `window_size == 0`.
    pub fn new(window_size: usize) -> Result<Self, EstimatorError> {
        if window_size == 0 {
            return Err(EstimatorError::InvalidConfiguration);
        }
        Ok(Self {
            window_size,
            buffer: VecDeque::with_capacity(window_size),
            sum: T::zero(),
        })
    }

    /// Replace the window size, discarding all buffered samples.
    ///
    /// The next output restarts the average from a single sample. This may
    /// allocate and should not be called from a real-time loop.
    ///
    /// # Example
    ///
    /// ```
    /// use balltrack::estimate::LowPassFilter;
    ///
    /// let mut f = LowPassFilter::<f64>::new(3).unwrap();
    /// f.get(10.0);
    /// f.set_window_size(2).unwrap();
    /// assert!(f.is_empty());
    /// assert_eq!(f.get(4.0), 4.0);
    /// ```
    pub fn set_window_size(&mut self, window_size: usize) -> Result<(), EstimatorError> {
        if window_size == 0 {
            return Err(EstimatorError::InvalidConfiguration);
        }
        debug!(
            "low-pass filter window resized from {} to {}, dropping {} samples",
            self.window_size,
            window_size,
            self.buffer.len()
        );
        self.window_size = window_size;
        self.buffer.clear();
        self.buffer.shrink_to(window_size);
        self.buffer.reserve(window_size);
        self.sum = T::zero();
        Ok(())
    }

    /// Feed one sample and return the current moving average.
    ///
    /// Once the window is full, the sum is recomputed from the buffer on
    /// every call, so an evicted outlier (or infinity) leaves no residue.
    #[inline]
    pub fn get(&mut self, value: T) -> T {
        if self.window_size <= 1 {
            return value;
        }
        if self.buffer.len() >= self.window_size {
            while self.buffer.len() >= self.window_size {
                self.buffer.pop_front();
            }
            self.buffer.push_back(value);
            self.sum = sum_of(&self.buffer);
        } else {
            self.buffer.push_back(value);
            self.sum = self.sum + value;
        }
        self.sum / T::from_count(self.buffer.len())
    }

    /// Drop all buffered samples, keeping the window size.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.sum = T::zero();
    }

    /// Configured window size.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of samples currently averaged.
    ///
    /// Always 0 for a passthrough filter.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// `true` once the window holds `window_size` samples.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.window_size
    }

    /// Sum of the buffered samples.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }
}

impl<T: FloatScalar> Default for LowPassFilter<T> {
    /// Passthrough filter (window of 1).
    fn default() -> Self {
        Self {
            window_size: 1,
            buffer: VecDeque::new(),
            sum: T::zero(),
        }
    }
}
