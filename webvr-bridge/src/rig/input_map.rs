// Where a named input reads its value from in a controller sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VRInputSource {
    Button(usize),
    Axis(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VRInputBinding {
    pub name: String,
    pub source: VRInputSource,
}

/// Maps input names such as "Trigger" or "Grip" to gamepad buttons and axes.
#[derive(Debug, Clone, PartialEq)]
pub struct VRInputMap {
    bindings: Vec<VRInputBinding>,
}

impl Default for VRInputMap {
    // Standard WebVR layout for tracked controllers.
    fn default() -> VRInputMap {
        VRInputMap::new()
            .with("Trigger", VRInputSource::Button(1))
            .with("Grip", VRInputSource::Button(2))
            .with("Thumbstick X", VRInputSource::Axis(0))
            .with("Thumbstick Y", VRInputSource::Axis(1))
    }
}

impl VRInputMap {
    pub fn new() -> VRInputMap {
        VRInputMap {
            bindings: Vec::new(),
        }
    }

    pub fn with(mut self, name: &str, source: VRInputSource) -> VRInputMap {
        self.bind(name, source);
        self
    }

    // Rebinding an existing name replaces its source.
    pub fn bind(&mut self, name: &str, source: VRInputSource) {
        match self.bindings.iter_mut().find(|binding| binding.name == name) {
            Some(binding) => binding.source = source,
            None => self.bindings.push(VRInputBinding {
                name: name.to_owned(),
                source: source,
            }),
        }
    }

    pub fn source(&self, name: &str) -> Option<VRInputSource> {
        self.bindings.iter()
                     .find(|binding| binding.name == name)
                     .map(|binding| binding.source)
    }

    pub fn bindings(&self) -> &[VRInputBinding] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let map = VRInputMap::default();
        assert_eq!(map.source("Trigger"), Some(VRInputSource::Button(1)));
        assert_eq!(map.source("Grip"), Some(VRInputSource::Button(2)));
        assert_eq!(map.source("Thumbstick Y"), Some(VRInputSource::Axis(1)));
        assert_eq!(map.source("Menu"), None);
    }

    #[test]
    fn rebinding_replaces() {
        let map = VRInputMap::default().with("Grip", VRInputSource::Axis(2));
        assert_eq!(map.source("Grip"), Some(VRInputSource::Axis(2)));
        assert_eq!(map.bindings().len(), 4);
    }
}
