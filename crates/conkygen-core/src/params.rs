//! Configuration parameter tree with missing-key tolerance.
//!
//! The tree is built once from a parsed YAML or JSON document and is read-only
//! afterwards. Lookups never fail: an absent key at any depth yields a
//! [`ParamTree::Missing`] node, so designs can chain accessors without null
//! checks (`params.path("geometry.width_min").as_u32()`).

use std::collections::BTreeMap;

/// A node in the configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamTree {
    /// String-keyed mapping
    Map(BTreeMap<String, ParamTree>),
    /// Ordered sequence
    List(Vec<ParamTree>),
    /// String scalar
    String(String),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// Boolean scalar
    Bool(bool),
    /// Absent value; returned for every lookup that has no match
    Missing,
}

static MISSING: ParamTree = ParamTree::Missing;

impl ParamTree {
    /// Parse a tree from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Parse a tree from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Look up a key on a map node.
    ///
    /// Returns [`ParamTree::Missing`] when the key is absent or when this node
    /// is not a map.
    #[must_use]
    pub fn get(&self, key: &str) -> &Self {
        match self {
            Self::Map(map) => map.get(key).unwrap_or(&MISSING),
            _ => &MISSING,
        }
    }

    /// Look up a dotted path, e.g. `"geometry.width_min"`.
    #[must_use]
    pub fn path(&self, dotted: &str) -> &Self {
        dotted.split('.').fold(self, Self::get)
    }

    /// Look up an element of a list node.
    #[must_use]
    pub fn index(&self, i: usize) -> &Self {
        match self {
            Self::List(items) => items.get(i).unwrap_or(&MISSING),
            _ => &MISSING,
        }
    }

    /// Iterate over list elements. Empty for non-list nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        match self {
            Self::List(items) => items.iter(),
            _ => [].iter(),
        }
    }

    /// Iterate over map entries. Empty for non-map nodes.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Self)> {
        let map = match self {
            Self::Map(map) => Some(map),
            _ => None,
        };
        map.into_iter()
            .flat_map(|m| m.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// True for the absent-value node.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Number of children for maps and lists, zero otherwise.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Map(map) => map.len(),
            Self::List(items) => items.len(),
            _ => 0,
        }
    }

    /// True when [`len`](Self::len) is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// String value, if this node is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value, if this node is an integer scalar.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Integer value narrowed to `u32`, if representable.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        self.as_i64().and_then(|n| u32::try_from(n).ok())
    }

    /// Floating-point value; integer scalars are widened.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Boolean value, if this node is a boolean scalar.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<serde_yaml::Value> for ParamTree {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_i64().map_or_else(
                || Self::Float(n.as_f64().unwrap_or(0.0)),
                Self::Int,
            ),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Map(
                map.into_iter()
                    .filter_map(|(k, v)| k.as_str().map(|k| (k.to_string(), Self::from(v))))
                    .collect(),
            ),
            // Tagged values are opaque to the generator; keep the inner value.
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

impl From<serde_json::Value> for ParamTree {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_i64().map_or_else(
                || Self::Float(n.as_f64().unwrap_or(0.0)),
                Self::Int,
            ),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_YAML: &str = r"
host:
  name: workstation
geometry:
  width_min: 240
  gap: 10
network:
  devices:
    - eth0
    - wlan0
filesystems:
  - mountpoint: /
    device: sda2
style:
  refresh_interval: 2
  transparent: true
  scale: 1.5
";

    #[test]
    fn test_from_yaml() {
        let tree = ParamTree::from_yaml(EXAMPLE_YAML).unwrap();
        assert_eq!(tree.path("host.name").as_str(), Some("workstation"));
        assert_eq!(tree.path("geometry.width_min").as_u32(), Some(240));
        assert_eq!(tree.path("style.transparent").as_bool(), Some(true));
        assert_eq!(tree.path("style.scale").as_f64(), Some(1.5));
    }

    #[test]
    fn test_from_json() {
        let tree = ParamTree::from_json(r#"{"geometry": {"gap": 5}, "cpus": 4}"#).unwrap();
        assert_eq!(tree.path("geometry.gap").as_u32(), Some(5));
        assert_eq!(tree.get("cpus").as_i64(), Some(4));
    }

    #[test]
    fn test_missing_key_yields_missing_node() {
        let tree = ParamTree::from_yaml(EXAMPLE_YAML).unwrap();
        assert!(tree.get("no_such_key").is_missing());
        assert!(tree.path("host.no_such_key").is_missing());
        // Lookups can continue through a missing branch without failing.
        assert!(tree.path("absent.deeply.nested").is_missing());
        assert_eq!(tree.path("absent.deeply.nested").as_str(), None);
    }

    #[test]
    fn test_lookup_on_scalar_yields_missing() {
        let tree = ParamTree::from_yaml(EXAMPLE_YAML).unwrap();
        assert!(tree.path("host.name.further").is_missing());
        assert!(tree.path("geometry.gap").get("x").is_missing());
    }

    #[test]
    fn test_list_access() {
        let tree = ParamTree::from_yaml(EXAMPLE_YAML).unwrap();
        let devices = tree.path("network.devices");
        assert_eq!(devices.len(), 2);
        assert_eq!(devices.index(0).as_str(), Some("eth0"));
        assert_eq!(devices.index(1).as_str(), Some("wlan0"));
        assert!(devices.index(2).is_missing());

        let names: Vec<&str> = devices.iter().filter_map(ParamTree::as_str).collect();
        assert_eq!(names, vec!["eth0", "wlan0"]);
    }

    #[test]
    fn test_nested_list_of_maps() {
        let tree = ParamTree::from_yaml(EXAMPLE_YAML).unwrap();
        let fs = tree.get("filesystems").index(0);
        assert_eq!(fs.get("mountpoint").as_str(), Some("/"));
        assert_eq!(fs.get("device").as_str(), Some("sda2"));
    }

    #[test]
    fn test_entries_iteration() {
        let tree = ParamTree::from_yaml("a: 1\nb: 2\n").unwrap();
        let keys: Vec<&str> = tree.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(ParamTree::Missing.entries().next().is_none());
    }

    #[test]
    fn test_missing_scalar_accessors() {
        assert_eq!(ParamTree::Missing.as_str(), None);
        assert_eq!(ParamTree::Missing.as_i64(), None);
        assert_eq!(ParamTree::Missing.as_u32(), None);
        assert_eq!(ParamTree::Missing.as_f64(), None);
        assert_eq!(ParamTree::Missing.as_bool(), None);
        assert!(ParamTree::Missing.is_empty());
    }

    #[test]
    fn test_negative_int_does_not_narrow_to_u32() {
        let tree = ParamTree::from_yaml("offset: -3").unwrap();
        assert_eq!(tree.get("offset").as_i64(), Some(-3));
        assert_eq!(tree.get("offset").as_u32(), None);
    }
}
