//! SSD1306 OLED panel session
//!
//! Owns the transport and the panel's supply enable line. A session is
//! either `Uninitialized` (supply off, bus closed) or `Ready`; only a ready
//! session accepts `update`, `set_contrast` and `invert`.
//!
//! ```text
//!            init(level)
//! Uninitialized ────────► Ready
//!       ▲                   │
//!       └───── deinit() ────┘
//! ```

use toholed_display::framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
use toholed_hal::{OutputPin, PanelBus};

use crate::config::PanelConfig;
use crate::contrast::ContrastLevel;
use crate::error::PanelError;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_SEG_NORMAL: u8 = 0xA0;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;

    /// Horizontal addressing: column pointer wraps into the next page
    pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;
    /// Internal DC/DC charge pump on
    pub const CHARGE_PUMP_ON: u8 = 0x14;
}

/// Length of the fixed initialization sequence
const INIT_SEQUENCE_LEN: usize = 21;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    /// Supply off, transport closed
    Uninitialized,
    /// Panel configured and accepting frames
    Ready,
}

/// Build the power-up command sequence
///
/// Segment and COM remap are chosen by the mounting orientation.
fn init_sequence(config: &PanelConfig) -> [u8; INIT_SEQUENCE_LEN] {
    let (segment, com_scan) = if config.rotate_180 {
        (cmd::SET_SEG_NORMAL, cmd::SET_COM_SCAN_INC)
    } else {
        (cmd::SET_SEG_REMAP, cmd::SET_COM_SCAN_DEC)
    };

    [
        cmd::DISPLAY_OFF,
        cmd::SET_CLOCK_DIV,
        0x80, // Default oscillator frequency, divide ratio 1
        cmd::SET_MUX_RATIO,
        (HEIGHT - 1) as u8,
        cmd::SET_DISPLAY_OFFSET,
        0x00,
        cmd::SET_START_LINE,
        cmd::SET_CHARGE_PUMP,
        cmd::CHARGE_PUMP_ON,
        cmd::SET_MEMORY_MODE,
        cmd::MEMORY_MODE_HORIZONTAL,
        segment,
        com_scan,
        cmd::SET_COM_PINS,
        0x12, // Alternative COM config, no left/right remap
        cmd::SET_VCOM_DETECT,
        0x40,
        cmd::RESUME_FROM_RAM,
        cmd::SET_NORMAL,
        cmd::DISPLAY_ON,
    ]
}

/// SSD1306 panel session
pub struct Panel<B, P> {
    bus: B,
    /// Panel supply enable
    power: P,
    config: PanelConfig,
    state: PanelState,
    /// Preset last sent in this session
    contrast: Option<ContrastLevel>,
    inverted: bool,
}

impl<B, P> Panel<B, P>
where
    B: PanelBus,
    P: OutputPin,
{
    /// Create an uninitialized session with the default configuration
    pub fn new(bus: B, power: P) -> Self {
        Self::with_config(bus, power, PanelConfig::default())
    }

    /// Create an uninitialized session
    ///
    /// The supply line is driven low so the panel starts unpowered.
    pub fn with_config(bus: B, mut power: P, config: PanelConfig) -> Self {
        power.set_low();
        Self {
            bus,
            power,
            config,
            state: PanelState::Uninitialized,
            contrast: None,
            inverted: false,
        }
    }

    /// Power the panel, open the transport and configure the controller
    ///
    /// `level` is a [`ContrastLevel`] or a raw preset code. An unknown code
    /// fails with [`PanelError::InvalidLevel`] before the hardware is
    /// touched. If the supply line does not come up the transport is never
    /// opened and [`PanelError::PowerFault`] is returned. On any transport
    /// failure the supply is switched back off and the session stays
    /// uninitialized.
    pub fn init<L>(&mut self, level: L) -> Result<(), PanelError<B::Error>>
    where
        L: TryInto<ContrastLevel>,
    {
        let level = level.try_into().map_err(|_| PanelError::InvalidLevel)?;
        if self.state == PanelState::Ready {
            return Err(PanelError::InvalidState);
        }

        self.power.set_high();
        if !self.power.is_set_high() {
            self.power.set_low();
            #[cfg(feature = "defmt")]
            defmt::error!("OLED supply did not switch on");
            return Err(PanelError::PowerFault);
        }

        if let Err(e) = self.bus.open() {
            self.power.set_low();
            return Err(PanelError::Transport(e));
        }

        if let Err(e) = self.configure(level) {
            self.bus.close();
            self.power.set_low();
            return Err(PanelError::Transport(e));
        }

        self.state = PanelState::Ready;
        #[cfg(feature = "defmt")]
        defmt::info!("OLED initialized, contrast {}", level);
        Ok(())
    }

    /// Start the session with the configured brightness preset
    pub fn init_default(&mut self) -> Result<(), PanelError<B::Error>> {
        self.init(self.config.contrast)
    }

    fn configure(&mut self, level: ContrastLevel) -> Result<(), B::Error> {
        self.bus.send_commands(&init_sequence(&self.config))?;
        self.send_contrast(level)?;
        self.inverted = false;
        if self.config.inverted {
            self.send_invert(true)?;
        }
        Ok(())
    }

    /// Switch the panel off and release the hardware
    ///
    /// Safe to call in any state. The display-off command is best effort:
    /// a failure is logged, and teardown continues regardless. The supply
    /// line is always left low.
    pub fn deinit(&mut self) {
        if self.state == PanelState::Ready {
            if self.bus.send_commands(&[cmd::DISPLAY_OFF]).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("Display off failed during teardown");
            }
            self.power.set_low();
            self.bus.close();
            self.state = PanelState::Uninitialized;
            self.contrast = None;
            #[cfg(feature = "defmt")]
            defmt::info!("OLED powered down");
        }
        self.power.set_low();

        if self.power.is_set_high() {
            #[cfg(feature = "defmt")]
            defmt::error!("OLED supply still on after teardown");
        }
    }

    /// Push the whole framebuffer to the panel
    ///
    /// Sets the addressing window to the full screen and streams all eight
    /// pages. A transport failure aborts the frame; nothing is retried.
    pub fn update(&mut self, fb: &Framebuffer) -> Result<(), PanelError<B::Error>> {
        self.ensure_ready()?;

        self.bus.send_commands(&[
            cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ])?;

        let mut page = [0u8; WIDTH];
        for index in 0..PAGES {
            fb.render_page(index, &mut page);
            self.bus.send_data(&page)?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Frame pushed");
        Ok(())
    }

    /// Change the brightness preset
    pub fn set_contrast<L>(&mut self, level: L) -> Result<(), PanelError<B::Error>>
    where
        L: TryInto<ContrastLevel>,
    {
        let level = level.try_into().map_err(|_| PanelError::InvalidLevel)?;
        self.ensure_ready()?;
        self.send_contrast(level)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Contrast set to {}", level);
        Ok(())
    }

    /// Select inverted or normal pixel polarity
    pub fn invert(&mut self, inverted: bool) -> Result<(), PanelError<B::Error>> {
        self.ensure_ready()?;
        self.send_invert(inverted)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Inverted: {}", inverted);
        Ok(())
    }

    /// Blank or unblank the panel without losing display RAM
    pub fn set_display_on(&mut self, on: bool) -> Result<(), PanelError<B::Error>> {
        self.ensure_ready()?;
        let command = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.bus.send_commands(&[command])?;
        Ok(())
    }

    /// Current session state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Brightness preset last sent to the panel in this session
    ///
    /// `None` until `init` has applied one, and again after `deinit`.
    pub fn contrast(&self) -> Option<ContrastLevel> {
        self.contrast
    }

    /// Whether the supply enable line is currently driven high
    pub fn is_powered(&self) -> bool {
        self.power.is_set_high()
    }

    /// Whether the panel is currently inverted
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Session configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Tear down the session and give back the bus and supply pin
    pub fn release(mut self) -> (B, P) {
        self.deinit();
        (self.bus, self.power)
    }

    fn ensure_ready(&self) -> Result<(), PanelError<B::Error>> {
        match self.state {
            PanelState::Ready => Ok(()),
            PanelState::Uninitialized => Err(PanelError::InvalidState),
        }
    }

    fn send_contrast(&mut self, level: ContrastLevel) -> Result<(), B::Error> {
        self.bus.send_commands(&[
            cmd::SET_CONTRAST,
            level.contrast(),
            cmd::SET_PRECHARGE,
            level.precharge(),
        ])?;
        self.contrast = Some(level);
        Ok(())
    }

    fn send_invert(&mut self, inverted: bool) -> Result<(), B::Error> {
        let command = if inverted { cmd::SET_INVERSE } else { cmd::SET_NORMAL };
        self.bus.send_commands(&[command])?;
        self.inverted = inverted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toholed_display::{draw_analog_clock, draw_icon, Color, Icon, BUFFER_SIZE};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Open,
        Close,
        Commands(Vec<u8>),
        Data(Vec<u8>),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    /// Mock transport recording every call
    #[derive(Default)]
    struct MockBus {
        calls: Vec<Call>,
        fail_open: bool,
        fail_commands: bool,
        fail_data: bool,
    }

    impl MockBus {
        fn commands(&self) -> Vec<u8> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Commands(bytes) => Some(bytes.clone()),
                    _ => None,
                })
                .flatten()
                .collect()
        }

        fn data(&self) -> Vec<u8> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Data(bytes) => Some(bytes.clone()),
                    _ => None,
                })
                .flatten()
                .collect()
        }
    }

    impl PanelBus for MockBus {
        type Error = BusFault;

        fn open(&mut self) -> Result<(), BusFault> {
            if self.fail_open {
                return Err(BusFault);
            }
            self.calls.push(Call::Open);
            Ok(())
        }

        fn close(&mut self) {
            self.calls.push(Call::Close);
        }

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), BusFault> {
            if self.fail_commands {
                return Err(BusFault);
            }
            self.calls.push(Call::Commands(commands.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), BusFault> {
            if self.fail_data {
                return Err(BusFault);
            }
            self.calls.push(Call::Data(data.to_vec()));
            Ok(())
        }
    }

    /// Mock supply pin
    #[derive(Default)]
    struct MockPin {
        high: bool,
        raised: usize,
        /// Writes are ignored, the line keeps its level
        stuck: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.raised += 1;
            if !self.stuck {
                self.high = true;
            }
        }

        fn set_low(&mut self) {
            if !self.stuck {
                self.high = false;
            }
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn ready_panel() -> Panel<MockBus, MockPin> {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        panel.init(ContrastLevel::High).unwrap();
        panel.bus.calls.clear();
        panel
    }

    #[test]
    fn test_init_sequence() {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        panel.init(ContrastLevel::Medium).unwrap();

        assert_eq!(panel.state(), PanelState::Ready);
        assert!(panel.power.is_set_high());
        assert_eq!(panel.bus.calls[0], Call::Open);

        let mut expected = init_sequence(&PanelConfig::default()).to_vec();
        expected.extend_from_slice(&[0x81, 0x40, 0xD9, 0x71]);
        assert_eq!(panel.bus.commands(), expected);
        assert_eq!(panel.contrast(), Some(ContrastLevel::Medium));
        assert!(!panel.is_inverted());
    }

    #[test]
    fn test_init_sequence_contents() {
        let normal = init_sequence(&PanelConfig::default());
        assert_eq!(normal[0], cmd::DISPLAY_OFF);
        assert_eq!(&normal[3..5], &[cmd::SET_MUX_RATIO, 0x3F]);
        assert_eq!(&normal[8..10], &[cmd::SET_CHARGE_PUMP, 0x14]);
        assert_eq!(&normal[12..14], &[cmd::SET_SEG_REMAP, cmd::SET_COM_SCAN_DEC]);
        assert_eq!(normal[INIT_SEQUENCE_LEN - 1], cmd::DISPLAY_ON);

        let flipped = init_sequence(&PanelConfig {
            rotate_180: true,
            ..Default::default()
        });
        assert_eq!(&flipped[12..14], &[cmd::SET_SEG_NORMAL, cmd::SET_COM_SCAN_INC]);
    }

    #[test]
    fn test_init_accepts_raw_codes() {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        panel.init(0x1011u16).unwrap();
        assert_eq!(panel.contrast(), Some(ContrastLevel::Low));
        assert!(panel.bus.commands().ends_with(&[0x81, 0x10, 0xD9, 0x11]));
    }

    #[test]
    fn test_init_invalid_level_no_io() {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        assert_eq!(panel.init(0x1234u16), Err(PanelError::InvalidLevel));

        assert!(panel.bus.calls.is_empty());
        assert_eq!(panel.power.raised, 0);
        assert_eq!(panel.state(), PanelState::Uninitialized);
    }

    #[test]
    fn test_init_open_failure_powers_down() {
        let bus = MockBus {
            fail_open: true,
            ..Default::default()
        };
        let mut panel = Panel::new(bus, MockPin::default());

        assert_eq!(
            panel.init(ContrastLevel::High),
            Err(PanelError::Transport(BusFault))
        );
        assert!(panel.power.is_set_low());
        assert_eq!(panel.power.raised, 1);
        assert_eq!(panel.state(), PanelState::Uninitialized);
    }

    #[test]
    fn test_init_command_failure_closes_bus() {
        let bus = MockBus {
            fail_commands: true,
            ..Default::default()
        };
        let mut panel = Panel::new(bus, MockPin::default());

        assert_eq!(
            panel.init(ContrastLevel::High),
            Err(PanelError::Transport(BusFault))
        );
        assert_eq!(panel.bus.calls, [Call::Open, Call::Close]);
        assert!(panel.power.is_set_low());
        assert_eq!(panel.state(), PanelState::Uninitialized);
    }

    #[test]
    fn test_init_twice_rejected() {
        let mut panel = ready_panel();
        assert_eq!(panel.init(ContrastLevel::Low), Err(PanelError::InvalidState));
        assert!(panel.bus.calls.is_empty());
        assert_eq!(panel.contrast(), Some(ContrastLevel::High));
    }

    #[test]
    fn test_init_applies_configured_inversion() {
        let config = PanelConfig {
            inverted: true,
            ..Default::default()
        };
        let mut panel = Panel::with_config(MockBus::default(), MockPin::default(), config);
        panel.init(ContrastLevel::High).unwrap();

        assert!(panel.is_inverted());
        assert!(panel.bus.commands().ends_with(&[cmd::SET_INVERSE]));
    }

    #[test]
    fn test_update_uninitialized_no_io() {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        let fb = Framebuffer::new();

        assert_eq!(panel.update(&fb), Err(PanelError::InvalidState));
        assert!(panel.bus.calls.is_empty());
    }

    #[test]
    fn test_update_blank_frame() {
        let mut panel = ready_panel();
        let mut fb = Framebuffer::new();
        draw_icon(&mut fb, 0, 0, Icon::Sms).unwrap();
        toholed_display::clear(&mut fb);

        panel.update(&fb).unwrap();

        assert_eq!(
            panel.bus.calls[0],
            Call::Commands(vec![0x21, 0x00, 0x7F, 0x22, 0x00, 0x07])
        );
        let data = panel.bus.data();
        assert_eq!(data.len(), BUFFER_SIZE);
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_update_page_layout() {
        let mut panel = ready_panel();
        let mut fb = Framebuffer::new();
        fb.set(0, 0, Color::On);
        fb.set(5, 9, Color::On);
        fb.set(127, 63, Color::On);

        panel.update(&fb).unwrap();

        let data = panel.bus.data();
        assert_eq!(data[0], 0x01);
        assert_eq!(data[WIDTH + 5], 0x02);
        assert_eq!(data[BUFFER_SIZE - 1], 0x80);
        assert_eq!(data.iter().map(|b| b.count_ones()).sum::<u32>(), 3);
    }

    #[test]
    fn test_update_streams_whole_clock_frame() {
        let mut panel = ready_panel();
        let mut fb = Framebuffer::new();
        draw_analog_clock(&mut fb, 10, 10).unwrap();

        panel.update(&fb).unwrap();

        let data = panel.bus.data();
        let lit: u32 = fb.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(data.len(), BUFFER_SIZE);
        assert_eq!(data.iter().map(|b| b.count_ones()).sum::<u32>(), lit);
    }

    #[test]
    fn test_update_transport_error() {
        let mut panel = ready_panel();
        panel.bus.fail_data = true;

        assert_eq!(
            panel.update(&Framebuffer::new()),
            Err(PanelError::Transport(BusFault))
        );
        // No retry: only the address window went out
        assert_eq!(panel.bus.calls.len(), 1);
        assert_eq!(panel.state(), PanelState::Ready);
    }

    #[test]
    fn test_set_contrast() {
        let mut panel = ready_panel();
        panel.set_contrast(ContrastLevel::Low).unwrap();
        assert_eq!(panel.bus.calls, [Call::Commands(vec![0x81, 0x10, 0xD9, 0x11])]);
        assert_eq!(panel.contrast(), Some(ContrastLevel::Low));

        assert_eq!(panel.set_contrast(0x0001u16), Err(PanelError::InvalidLevel));
        assert_eq!(panel.bus.calls.len(), 1);
    }

    #[test]
    fn test_set_contrast_uninitialized() {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        assert_eq!(
            panel.set_contrast(ContrastLevel::Low),
            Err(PanelError::InvalidState)
        );
        assert!(panel.bus.calls.is_empty());
    }

    #[test]
    fn test_invert() {
        let mut panel = ready_panel();
        panel.invert(true).unwrap();
        assert!(panel.is_inverted());
        panel.invert(false).unwrap();
        assert!(!panel.is_inverted());

        assert_eq!(
            panel.bus.calls,
            [Call::Commands(vec![0xA7]), Call::Commands(vec![0xA6])]
        );
    }

    #[test]
    fn test_invert_transport_error() {
        let mut panel = ready_panel();
        panel.bus.fail_commands = true;
        assert_eq!(panel.invert(true), Err(PanelError::Transport(BusFault)));
        assert!(!panel.is_inverted());
    }

    #[test]
    fn test_invert_uninitialized() {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        assert_eq!(panel.invert(true), Err(PanelError::InvalidState));
        assert!(panel.bus.calls.is_empty());
    }

    #[test]
    fn test_display_on_off() {
        let mut panel = ready_panel();
        panel.set_display_on(false).unwrap();
        panel.set_display_on(true).unwrap();
        assert_eq!(panel.bus.commands(), [0xAE, 0xAF]);
    }

    #[test]
    fn test_deinit_sequence() {
        let mut panel = ready_panel();
        panel.deinit();

        assert_eq!(
            panel.bus.calls,
            [Call::Commands(vec![cmd::DISPLAY_OFF]), Call::Close]
        );
        assert!(panel.power.is_set_low());
        assert_eq!(panel.state(), PanelState::Uninitialized);
    }

    #[test]
    fn test_deinit_twice() {
        let mut panel = ready_panel();
        panel.deinit();
        panel.deinit();

        assert_eq!(panel.state(), PanelState::Uninitialized);
        assert!(panel.power.is_set_low());
        // Second call touched nothing
        assert_eq!(panel.bus.calls.len(), 2);
    }

    #[test]
    fn test_deinit_without_init() {
        let mut panel = Panel::new(MockBus::default(), MockPin::default());
        panel.deinit();

        assert!(panel.bus.calls.is_empty());
        assert!(panel.power.is_set_low());
    }

    #[test]
    fn test_deinit_completes_despite_transport_error() {
        let mut panel = ready_panel();
        panel.bus.fail_commands = true;
        panel.deinit();

        assert_eq!(panel.bus.calls, [Call::Close]);
        assert!(panel.power.is_set_low());
        assert_eq!(panel.state(), PanelState::Uninitialized);

        // A fresh session can start afterwards
        panel.bus.fail_commands = false;
        panel.init(ContrastLevel::High).unwrap();
        assert_eq!(panel.state(), PanelState::Ready);
    }

    #[test]
    fn test_release_tears_down() {
        let panel = ready_panel();
        let (bus, power) = panel.release();

        assert_eq!(bus.calls.last(), Some(&Call::Close));
        assert!(power.is_set_low());
    }

    #[test]
    fn test_contrast_unknown_until_sent() {
        let config = PanelConfig::with_contrast(ContrastLevel::Low);
        let mut panel = Panel::with_config(MockBus::default(), MockPin::default(), config);
        assert_eq!(panel.contrast(), None);

        panel.init(ContrastLevel::Medium).unwrap();
        assert_eq!(panel.contrast(), Some(ContrastLevel::Medium));

        panel.deinit();
        assert_eq!(panel.contrast(), None);
    }

    #[test]
    fn test_init_default_applies_configured_contrast() {
        let config = PanelConfig::with_contrast(ContrastLevel::Low);
        let mut panel = Panel::with_config(MockBus::default(), MockPin::default(), config);
        panel.init_default().unwrap();

        assert_eq!(panel.contrast(), Some(ContrastLevel::Low));
        assert!(panel.bus.commands().ends_with(&[0x81, 0x10, 0xD9, 0x11]));
    }

    #[test]
    fn test_init_power_fault_skips_bus() {
        let pin = MockPin {
            stuck: true,
            ..Default::default()
        };
        let mut panel = Panel::new(MockBus::default(), pin);

        assert_eq!(panel.init(ContrastLevel::High), Err(PanelError::PowerFault));
        assert!(panel.bus.calls.is_empty());
        assert!(!panel.is_powered());
        assert_eq!(panel.state(), PanelState::Uninitialized);
    }

    #[test]
    fn test_deinit_reports_stuck_supply() {
        let mut panel = ready_panel();
        assert!(panel.is_powered());

        panel.power.stuck = true;
        panel.deinit();

        assert_eq!(panel.state(), PanelState::Uninitialized);
        assert!(panel.is_powered());

        panel.power.stuck = false;
        panel.deinit();
        assert!(!panel.is_powered());
    }
}
