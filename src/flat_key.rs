use {
    itertools::Itertools,
    std::{borrow::Cow, fmt},
    tap::{Pipe, Tap},
};

pub const SEPARATOR: &str = ".";

/// One component of a flattened key: either a field name or the decimal
/// index of an array element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment<'a> {
    Idx(usize),
    Field(Cow<'a, str>),
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Idx(idx) => write!(f, "{idx}"),
            Segment::Field(field) => f.write_str(field),
        }
    }
}

impl Segment<'_> {
    pub fn to_owned(&self) -> Segment<'static> {
        match self {
            Segment::Idx(idx) => Segment::Idx(*idx),
            Segment::Field(field) => field.to_string().pipe(Cow::<str>::Owned).pipe(Segment::Field),
        }
    }
}

/// Dotted path to one leaf of a nested value, e.g. `items.0.name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct KeyPath<'a>(Vec<Segment<'a>>);

impl<'a> KeyPath<'a> {
    pub fn join(self, segment: Segment<'a>) -> Self {
        self.tap_mut(|path| path.0.push(segment))
    }

    pub fn to_owned(&self) -> KeyPath<'static> {
        self.0
            .iter()
            .map(Segment::to_owned)
            .collect::<Vec<_>>()
            .pipe(KeyPath)
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(SEPARATOR))
    }
}

pub fn boxed_iter<'a, T, I>(iter: I) -> Box<dyn Iterator<Item = T> + 'a>
where
    T: 'a,
    I: Iterator<Item = T> + 'a,
{
    Box::new(iter)
}

pub mod flatten;
