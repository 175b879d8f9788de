//! Structured Field value model
//!
//! Members and parameters are kept as explicit ordered lists rather than
//! maps so that wire order and duplicate keys stay observable.

/// A bare item value
#[derive(Debug, Clone, PartialEq)]
pub enum BareItem {
    Integer(i64),
    Decimal(f64),
    String(String),
    Token(String),
    ByteSequence(Vec<u8>),
    Boolean(bool),
}

/// Ordered parameter list attached to an item or inner list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters(Vec<(String, BareItem)>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, key: String, value: BareItem) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&BareItem> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single item with its parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub bare_item: BareItem,
    pub params: Parameters,
}

impl Item {
    /// An item with no parameters
    pub fn new(bare_item: BareItem) -> Self {
        Self {
            bare_item,
            params: Parameters::new(),
        }
    }
}

/// A parenthesised list of items
#[derive(Debug, Clone, PartialEq)]
pub struct InnerList {
    pub items: Vec<Item>,
    pub params: Parameters,
}

/// The value of a dictionary member
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredItem {
    Item(Item),
    InnerList(InnerList),
}

impl StructuredItem {
    pub fn is_inner_list(&self) -> bool {
        matches!(self, StructuredItem::InnerList(_))
    }

    /// The payload, when this member is a plain byte sequence item
    ///
    /// Parameters on the item are ignored.
    pub fn as_byte_sequence(&self) -> Option<&[u8]> {
        match self {
            StructuredItem::Item(Item {
                bare_item: BareItem::ByteSequence(bytes),
                ..
            }) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Item> for StructuredItem {
    fn from(item: Item) -> Self {
        StructuredItem::Item(item)
    }
}

impl From<InnerList> for StructuredItem {
    fn from(list: InnerList) -> Self {
        StructuredItem::InnerList(list)
    }
}

/// A Structured Field Dictionary as an ordered list of members
///
/// `members()` yields every member in wire order, duplicates included.
/// `get()` resolves duplicates the way the dictionary grammar does: the last
/// member with a given key wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    members: Vec<(String, StructuredItem)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member at the end, keeping any earlier member with the same key
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<StructuredItem>) {
        self.members.push((key.into(), value.into()));
    }

    /// Value of the last member named `key`
    pub fn get(&self, key: &str) -> Option<&StructuredItem> {
        self.members
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, &StructuredItem)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Distinct keys in order of first appearance
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.members.len());
        for (k, _) in &self.members {
            if !keys.contains(&k.as_str()) {
                keys.push(k);
            }
        }
        keys
    }

    /// Collapse duplicate keys, last member wins, keeping first-seen position
    pub fn deduplicated(&self) -> Dictionary {
        let members = self
            .keys()
            .into_iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v.clone())))
            .collect();
        Dictionary { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
