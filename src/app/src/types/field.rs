use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::config::{DeviceConfiguration, GpiInput, NumericValue, Universe};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum DmxField {
    Ip,
    Port,
    Direction,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum OscField {
    Enabled,
    ListenPort,
    TargetIp,
    TargetPort,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum MidiField {
    Enabled,
    Channel,
    Device,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum GpiField {
    Mode,
    Action,
}

/// Structured key of a bound form control.
///
/// Decoded once from the element identifier at the shell boundary
/// (`"dmx1-ip".parse::<FieldKey>()`), rendered back with `to_string()`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    Dmx { universe: Universe, field: DmxField },
    Osc(OscField),
    Midi(MidiField),
    Gpi { input: GpiInput, field: GpiField },
}

/// How a field is checked when it loses focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    IpAddress,
    Port,
    Unchecked,
}

impl FieldKey {
    /// Every bound control, in form order
    pub fn all() -> Vec<FieldKey> {
        let mut keys = Vec::new();
        for universe in Universe::ALL {
            for field in [DmxField::Ip, DmxField::Port, DmxField::Direction] {
                keys.push(FieldKey::Dmx { universe, field });
            }
        }
        for field in [
            OscField::ListenPort,
            OscField::TargetIp,
            OscField::TargetPort,
            OscField::Enabled,
        ] {
            keys.push(FieldKey::Osc(field));
        }
        for field in [MidiField::Channel, MidiField::Device, MidiField::Enabled] {
            keys.push(FieldKey::Midi(field));
        }
        for input in GpiInput::ALL {
            for field in [GpiField::Mode, GpiField::Action] {
                keys.push(FieldKey::Gpi { input, field });
            }
        }
        keys
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::Dmx { field: DmxField::Ip, .. } | FieldKey::Osc(OscField::TargetIp) => {
                FieldKind::IpAddress
            }
            FieldKey::Dmx { field: DmxField::Port, .. }
            | FieldKey::Osc(OscField::ListenPort | OscField::TargetPort) => FieldKind::Port,
            _ => FieldKind::Unchecked,
        }
    }


    /// Value to write back into the control for `config`
    pub fn form_value(self, config: &DeviceConfiguration) -> FieldInput {
        fn number(value: NumericValue) -> FieldInput {
            FieldInput::Text(value.map(|n| n.to_string()).unwrap_or_default())
        }

        match self {
            FieldKey::Dmx { universe, field } => {
                let dmx = config.dmx.universe(universe);
                match field {
                    DmxField::Ip => FieldInput::text(&dmx.ip),
                    DmxField::Port => number(dmx.port),
                    DmxField::Direction => FieldInput::text(dmx.direction.as_str()),
                }
            }
            FieldKey::Osc(field) => match field {
                OscField::Enabled => FieldInput::Checked(config.osc.enabled),
                OscField::ListenPort => number(config.osc.listen_port),
                OscField::TargetIp => FieldInput::text(&config.osc.target_ip),
                OscField::TargetPort => number(config.osc.target_port),
            },
            FieldKey::Midi(field) => match field {
                MidiField::Enabled => FieldInput::Checked(config.midi.enabled),
                MidiField::Channel => number(config.midi.channel),
                MidiField::Device => FieldInput::text(&config.midi.device),
            },
            FieldKey::Gpi { input, field } => {
                let gpi = config.gpi.input(input);
                match field {
                    GpiField::Mode => FieldInput::text(gpi.mode.as_str()),
                    GpiField::Action => FieldInput::text(gpi.action.as_str()),
                }
            }
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Dmx { universe, field } => {
                let field = match field {
                    DmxField::Ip => "ip",
                    DmxField::Port => "port",
                    DmxField::Direction => "direction",
                };
                write!(f, "dmx{}-{field}", universe.number())
            }
            FieldKey::Osc(field) => {
                let field = match field {
                    OscField::Enabled => "enabled",
                    OscField::ListenPort => "listen-port",
                    OscField::TargetIp => "target-ip",
                    OscField::TargetPort => "target-port",
                };
                write!(f, "osc-{field}")
            }
            FieldKey::Midi(field) => {
                let field = match field {
                    MidiField::Enabled => "enabled",
                    MidiField::Channel => "channel",
                    MidiField::Device => "device",
                };
                write!(f, "midi-{field}")
            }
            FieldKey::Gpi { input, field } => {
                let field = match field {
                    GpiField::Mode => "mode",
                    GpiField::Action => "action",
                };
                write!(f, "gpi{input}-{field}")
            }
        }
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(element_id: &str) -> Result<Self, Self::Err> {
        let unknown = || format!("Unknown form element '{element_id}'");
        let (prefix, field) = element_id.split_once('-').ok_or_else(unknown)?;

        let key = match prefix {
            "osc" => FieldKey::Osc(match field {
                "enabled" => OscField::Enabled,
                "listen-port" => OscField::ListenPort,
                "target-ip" => OscField::TargetIp,
                "target-port" => OscField::TargetPort,
                _ => return Err(unknown()),
            }),
            "midi" => FieldKey::Midi(match field {
                "enabled" => MidiField::Enabled,
                "channel" => MidiField::Channel,
                "device" => MidiField::Device,
                _ => return Err(unknown()),
            }),
            _ => {
                if let Some(number) = prefix.strip_prefix("dmx") {
                    let universe = number
                        .parse::<u8>()
                        .ok()
                        .and_then(Universe::from_number)
                        .ok_or_else(unknown)?;
                    let field = match field {
                        "ip" => DmxField::Ip,
                        "port" => DmxField::Port,
                        "direction" => DmxField::Direction,
                        _ => return Err(unknown()),
                    };
                    FieldKey::Dmx { universe, field }
                } else if let Some(number) = prefix.strip_prefix("gpi") {
                    let input = number
                        .parse::<u8>()
                        .ok()
                        .and_then(GpiInput::from_number)
                        .ok_or_else(unknown)?;
                    let field = match field {
                        "mode" => GpiField::Mode,
                        "action" => GpiField::Action,
                        _ => return Err(unknown()),
                    };
                    FieldKey::Gpi { input, field }
                } else {
                    return Err(unknown());
                }
            }
        };

        Ok(key)
    }
}

/// Raw value of a form control as read by the shell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldInput {
    /// `value` of text inputs and selects
    Text(String),
    /// `checked` of checkboxes
    Checked(bool),
}

impl FieldInput {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text content, or the flag rendered as `"true"`/`"false"`
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Checked(checked) => checked.to_string(),
        }
    }

    /// Flag of a checkbox; text is accepted when it spells a boolean
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Checked(checked) => Some(*checked),
            Self::Text(text) => match text.as_str() {
                "true" | "on" => Some(true),
                "false" | "off" => Some(false),
                _ => None,
            },
        }
    }
}
