use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric form value after integer coercion.
///
/// `None` is the "not a number" result of coercing text without a leading
/// integer. It is stored as-is and exported as JSON `null`.
pub type NumericValue = Option<i64>;

/// DMX universe slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Universe {
    One,
    Two,
}

impl Universe {
    pub const ALL: [Universe; 2] = [Universe::One, Universe::Two];

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    /// Key of the universe inside the `dmx` section
    pub fn key(self) -> &'static str {
        match self {
            Self::One => "universe1",
            Self::Two => "universe2",
        }
    }
}

/// General purpose input slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum GpiInput {
    One,
    Two,
    Three,
    Four,
}

impl GpiInput {
    pub const ALL: [GpiInput; 4] = [GpiInput::One, GpiInput::Two, GpiInput::Three, GpiInput::Four];

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|input| input.number() == number)
    }
}

impl fmt::Display for GpiInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DmxDirection {
    #[default]
    Output,
    Input,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GpiMode {
    #[default]
    Momentary,
    Toggle,
    Disabled,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GpiAction {
    #[default]
    SceneTrigger,
    DmxBlackout,
    OscMessage,
    MidiNote,
}

/// Status of a GPI slot, derived from its mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GpiStatus {
    Active,
    #[default]
    Inactive,
    Disabled,
}

impl GpiStatus {
    /// Resting status for a mode: `Disabled` iff the mode is disabled
    pub fn for_mode(mode: GpiMode) -> Self {
        match mode {
            GpiMode::Disabled => Self::Disabled,
            GpiMode::Momentary | GpiMode::Toggle => Self::Inactive,
        }
    }

    /// Text shown next to the status dot
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Disabled => "Disabled",
        }
    }
}

/// Option values of select controls (`"output"`, `"scene-trigger"`, ...),
/// identical to the serde names of the variants.
macro_rules! select_options {
    ($($ty:ident => $label:expr, { $($variant:ident => $value:literal),+ $(,)? })+) => {$(
        impl $ty {
            pub const OPTIONS: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $value),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($ty::$variant),)+
                    _ => Err(format!("Unknown {} '{s}'", $label)),
                }
            }
        }
    )+};
}

select_options! {
    DmxDirection => "DMX direction", {
        Output => "output",
        Input => "input",
    }
    GpiMode => "GPI mode", {
        Momentary => "momentary",
        Toggle => "toggle",
        Disabled => "disabled",
    }
    GpiAction => "GPI action", {
        SceneTrigger => "scene-trigger",
        DmxBlackout => "dmx-blackout",
        OscMessage => "osc-message",
        MidiNote => "midi-note",
    }
}

/// One DMX output universe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DmxUniverse {
    pub ip: String,
    pub port: NumericValue,
    pub direction: DmxDirection,
}

impl DmxUniverse {
    fn new(ip: &str, port: i64) -> Self {
        Self {
            ip: ip.to_string(),
            port: Some(port),
            direction: DmxDirection::Output,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DmxConfig {
    pub universe1: DmxUniverse,
    pub universe2: DmxUniverse,
}

impl DmxConfig {
    pub fn universe(&self, universe: Universe) -> &DmxUniverse {
        match universe {
            Universe::One => &self.universe1,
            Universe::Two => &self.universe2,
        }
    }

    pub fn universe_mut(&mut self, universe: Universe) -> &mut DmxUniverse {
        match universe {
            Universe::One => &mut self.universe1,
            Universe::Two => &mut self.universe2,
        }
    }
}

/// Open Sound Control endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OscConfig {
    pub enabled: bool,
    pub listen_port: NumericValue,
    pub target_ip: String,
    pub target_port: NumericValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MidiConfig {
    pub enabled: bool,
    /// 1-16 by convention, not enforced
    pub channel: NumericValue,
    pub device: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GpiInputConfig {
    pub mode: GpiMode,
    pub action: GpiAction,
    pub status: GpiStatus,
}

impl GpiInputConfig {
    fn new(mode: GpiMode, action: GpiAction) -> Self {
        Self {
            mode,
            action,
            status: GpiStatus::for_mode(mode),
        }
    }

    /// Sets the mode and re-derives the status
    pub fn set_mode(&mut self, mode: GpiMode) {
        self.mode = mode;
        self.status = GpiStatus::for_mode(mode);
    }

    pub fn is_disabled(&self) -> bool {
        self.mode == GpiMode::Disabled
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GpiConfig {
    pub input1: GpiInputConfig,
    pub input2: GpiInputConfig,
    pub input3: GpiInputConfig,
    pub input4: GpiInputConfig,
}

impl GpiConfig {
    pub fn input(&self, input: GpiInput) -> &GpiInputConfig {
        match input {
            GpiInput::One => &self.input1,
            GpiInput::Two => &self.input2,
            GpiInput::Three => &self.input3,
            GpiInput::Four => &self.input4,
        }
    }

    pub fn input_mut(&mut self, input: GpiInput) -> &mut GpiInputConfig {
        match input {
            GpiInput::One => &mut self.input1,
            GpiInput::Two => &mut self.input2,
            GpiInput::Three => &mut self.input3,
            GpiInput::Four => &mut self.input4,
        }
    }

    /// Slots whose mode is not `disabled`, in slot order
    pub fn enabled_inputs(&self) -> Vec<GpiInput> {
        GpiInput::ALL
            .into_iter()
            .filter(|input| !self.input(*input).is_disabled())
            .collect()
    }
}

/// Complete device configuration as edited by the panel and exported to
/// `lightly-device-config.json`.
///
/// Field order is the export key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfiguration {
    pub dmx: DmxConfig,
    pub osc: OscConfig,
    pub midi: MidiConfig,
    pub gpi: GpiConfig,
}

impl Default for DeviceConfiguration {
    fn default() -> Self {
        Self {
            dmx: DmxConfig {
                universe1: DmxUniverse::new("192.168.1.100", 6454),
                universe2: DmxUniverse::new("192.168.1.101", 6455),
            },
            osc: OscConfig {
                enabled: true,
                listen_port: Some(8000),
                target_ip: "192.168.1.50".to_string(),
                target_port: Some(9000),
            },
            midi: MidiConfig {
                enabled: true,
                channel: Some(1),
                device: "usb".to_string(),
            },
            gpi: GpiConfig {
                input1: GpiInputConfig::new(GpiMode::Momentary, GpiAction::SceneTrigger),
                input2: GpiInputConfig::new(GpiMode::Toggle, GpiAction::DmxBlackout),
                input3: GpiInputConfig::new(GpiMode::Disabled, GpiAction::OscMessage),
                input4: GpiInputConfig::new(GpiMode::Momentary, GpiAction::MidiNote),
            },
        }
    }
}

impl DeviceConfiguration {
    /// Pretty-printed JSON with two-space indentation
    pub fn export_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize configuration: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod defaults {
        use super::*;

        #[test]
        fn gpi_status_follows_mode() {
            let config = DeviceConfiguration::default();

            assert_eq!(config.gpi.input1.status, GpiStatus::Inactive);
            assert_eq!(config.gpi.input2.status, GpiStatus::Inactive);
            assert_eq!(config.gpi.input3.status, GpiStatus::Disabled);
            assert_eq!(config.gpi.input4.status, GpiStatus::Inactive);
        }

        #[test]
        fn enabled_inputs_skip_disabled_slot() {
            let config = DeviceConfiguration::default();

            assert_eq!(
                config.gpi.enabled_inputs(),
                vec![GpiInput::One, GpiInput::Two, GpiInput::Four]
            );
        }
    }

    mod export {
        use super::*;

        #[test]
        fn matches_default_template() {
            let json = DeviceConfiguration::default().export_json().unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();

            assert_eq!(
                value,
                serde_json::json!({
                    "dmx": {
                        "universe1": { "ip": "192.168.1.100", "port": 6454, "direction": "output" },
                        "universe2": { "ip": "192.168.1.101", "port": 6455, "direction": "output" }
                    },
                    "osc": {
                        "enabled": true,
                        "listenPort": 8000,
                        "targetIp": "192.168.1.50",
                        "targetPort": 9000
                    },
                    "midi": { "enabled": true, "channel": 1, "device": "usb" },
                    "gpi": {
                        "input1": { "mode": "momentary", "action": "scene-trigger", "status": "inactive" },
                        "input2": { "mode": "toggle", "action": "dmx-blackout", "status": "inactive" },
                        "input3": { "mode": "disabled", "action": "osc-message", "status": "disabled" },
                        "input4": { "mode": "momentary", "action": "midi-note", "status": "inactive" }
                    }
                })
            );
        }

        #[test]
        fn keeps_declared_key_order_and_indent() {
            let json = DeviceConfiguration::default().export_json().unwrap();

            let dmx = json.find("\"dmx\"").unwrap();
            let osc = json.find("\"osc\"").unwrap();
            let midi = json.find("\"midi\"").unwrap();
            let gpi = json.find("\"gpi\"").unwrap();
            assert!(dmx < osc && osc < midi && midi < gpi);
            assert!(json.starts_with("{\n  \"dmx\": {\n    \"universe1\": {\n      \"ip\""));
        }

        #[test]
        fn round_trips_modified_configuration() {
            let mut config = DeviceConfiguration::default();
            config.dmx.universe2.port = None;
            config.osc.target_ip = "not-an-ip".to_string();
            config.midi.channel = Some(42);
            config.gpi.input2.set_mode(GpiMode::Disabled);

            let json = config.export_json().unwrap();
            let parsed: DeviceConfiguration = serde_json::from_str(&json).unwrap();

            assert_eq!(parsed, config);
            assert!(json.contains("\"port\": null"));
        }
    }

    mod options {
        use super::*;

        #[test]
        fn parse_form_values() {
            assert_eq!("output".parse::<DmxDirection>(), Ok(DmxDirection::Output));
            assert_eq!("toggle".parse::<GpiMode>(), Ok(GpiMode::Toggle));
            assert_eq!("midi-note".parse::<GpiAction>(), Ok(GpiAction::MidiNote));
            assert!("sideways".parse::<DmxDirection>().is_err());
            assert!("Toggle".parse::<GpiMode>().is_err());
        }

        #[test]
        fn render_form_values() {
            assert_eq!(GpiAction::DmxBlackout.as_str(), "dmx-blackout");
            assert_eq!(GpiMode::Disabled.as_str(), "disabled");
        }

        #[test]
        fn form_values_match_serde_names() {
            fn serde_name(value: impl Serialize) -> String {
                serde_json::to_value(value).unwrap().as_str().unwrap().to_string()
            }

            for direction in DmxDirection::OPTIONS {
                assert_eq!(serde_name(direction), direction.as_str());
                assert_eq!(direction.as_str().parse(), Ok(*direction));
            }
            for mode in GpiMode::OPTIONS {
                assert_eq!(serde_name(mode), mode.as_str());
                assert_eq!(mode.as_str().parse(), Ok(*mode));
            }
            for action in GpiAction::OPTIONS {
                assert_eq!(serde_name(action), action.as_str());
                assert_eq!(action.as_str().parse(), Ok(*action));
            }
        }

        #[test]
        fn slot_numbers() {
            assert_eq!(GpiInput::from_number(3), Some(GpiInput::Three));
            assert_eq!(GpiInput::from_number(5), None);
            assert_eq!(Universe::from_number(2).map(Universe::key), Some("universe2"));
        }
    }
}
