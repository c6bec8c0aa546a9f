use crate::error::ConfigError;
use crate::transform::Mode;
use smallvec::SmallVec;
use std::fmt;

/// One-based track identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque name of a playable audio resource (the element id on the web).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AudioHandle(pub String);

impl AudioHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub audio_handle: AudioHandle,
    pub mode: Mode,
    pub tint: [f32; 3],
}

impl Track {
    #[inline]
    pub fn mode_index(&self) -> usize {
        self.mode.index()
    }
}

/// The fixed, validated set of tracks. Ids run 1..=N in order.
#[derive(Clone, Debug)]
pub struct TrackSet {
    tracks: SmallVec<[Track; 4]>,
}

impl TrackSet {
    pub fn new(tracks: impl IntoIterator<Item = Track>) -> Result<Self, ConfigError> {
        let tracks: SmallVec<[Track; 4]> = tracks.into_iter().collect();
        if tracks.is_empty() {
            return Err(ConfigError::NoTracks);
        }
        for (position, t) in tracks.iter().enumerate() {
            if t.id.0 as usize != position + 1 {
                return Err(ConfigError::TrackIds {
                    position,
                    found: t.id.0,
                });
            }
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|i| self.tracks.get(i))
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.get(id).is_some()
    }

    /// Forward-only cyclic successor: last wraps to first.
    pub fn next_after(&self, id: TrackId) -> TrackId {
        let n = self.tracks.len() as u32;
        if id.0 >= n {
            TrackId(1)
        } else {
            TrackId(id.0 + 1)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}
