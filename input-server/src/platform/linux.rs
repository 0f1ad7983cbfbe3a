//! Read the evdev nodes under `/dev/input` directly.
//!
//! Pointing devices with a wheel or side buttons are grabbed, and whatever the filter lets through
//! is replayed on a uinput clone of the device. Keyboards are only read: key events always pass
//! through, so there is nothing to replay.

use cyclekey_common::{errors::CyclekeyError, CyclekeyResult};
use epoll::{
	ControlOptions::{EPOLL_CTL_ADD, EPOLL_CTL_DEL},
	Events,
};
use evdev_rs::{
	enums::{EventCode, EV_KEY, EV_LED, EV_REL, EV_SYN},
	util::event_code_to_int,
	Device, GrabMode, InputEvent, ReadFlag, UInputDevice,
};
use rdev::{Button, Event, EventType, Key};
use std::{
	ffi::OsStr,
	fs::{self, File},
	io,
	os::unix::io::{AsRawFd, RawFd},
	path::{Path, PathBuf},
	time::SystemTime,
};

const DEV_INPUT: &str = "/dev/input";

/// The button number `BTN_SIDE` is reported as. X11 numbers it the same way.
pub const BUTTON_SIDE: u8 = 8;
/// The button number `BTN_EXTRA` is reported as.
pub const BUTTON_EXTRA: u8 = 9;

/// What is done with a device's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
	/// Exclusive access; events the filter swallows never reach anyone else.
	Grabbed,
	/// Shared access; the filter only observes.
	Watched,
}

impl Role {
	fn of(device: &Device) -> Option<Self> {
		let has = |code: EventCode| device.has(&code);
		if has(EventCode::EV_REL(EV_REL::REL_WHEEL))
			|| has(EventCode::EV_KEY(EV_KEY::BTN_SIDE))
			|| has(EventCode::EV_KEY(EV_KEY::BTN_EXTRA))
		{
			Some(Self::Grabbed)
		} else if has(EventCode::EV_KEY(EV_KEY::KEY_1))
			|| has(EventCode::EV_KEY(EV_KEY::KEY_CAPSLOCK))
		{
			Some(Self::Watched)
		} else {
			None
		}
	}
}

/// One opened device.
struct Source {
	path: PathBuf,
	fd: RawFd,
	device: Device,
	/// Only grabbed devices have one.
	output: Option<UInputDevice>,
	/// Events of the report being read, up to the next `SYN_REPORT`.
	pending: Vec<InputEvent>,
	/// Codes of buttons whose press was swallowed; their release is swallowed too.
	held: Vec<u32>,
	/// The decision taken for the last notch of the wheel, applied to the high resolution axis.
	wheel_swallowed: bool,
}

impl Source {
	fn open(path: &Path) -> io::Result<Option<Self>> {
		let file = File::open(path)?;
		let fd = file.as_raw_fd();
		let mut device = Device::new_from_fd(file)?;
		let Some(role) = Role::of(&device) else {
			return Ok(None);
		};
		let output = if role == Role::Grabbed {
			let output = UInputDevice::create_from_device(&device)?;
			device.grab(GrabMode::Grab)?;
			Some(output)
		} else {
			None
		};
		tracing::debug!(path = %path.display(), ?role, "Intercepting input device");
		Ok(Some(Self {
			path: path.to_path_buf(),
			fd,
			device,
			output,
			pending: Vec::new(),
			held: Vec::new(),
			wheel_swallowed: false,
		}))
	}

	fn is_grabbed(&self) -> bool {
		self.output.is_some()
	}

	/// Read everything the device has queued.
	fn drain<F>(&mut self, filter: &F) -> io::Result<()>
	where
		F: Fn(Event) -> Option<Event>,
	{
		while self.device.has_event_pending() {
			let (_, event) = self.device.next_event(ReadFlag::NORMAL)?;
			match event.event_code {
				EventCode::EV_SYN(EV_SYN::SYN_REPORT) => self.report(filter, &event)?,
				// the kernel's buffer overflowed; the partial report is meaningless
				EventCode::EV_SYN(EV_SYN::SYN_DROPPED) => self.pending.clear(),
				_ => self.pending.push(event),
			}
		}
		Ok(())
	}

	/// Run one complete report through the filter and replay what it keeps.
	fn report<F>(&mut self, filter: &F, report: &InputEvent) -> io::Result<()>
	where
		F: Fn(Event) -> Option<Event>,
	{
		let frame = std::mem::take(&mut self.pending);
		let mut keep = vec![true; frame.len()];
		for (event, keep) in frame.iter().zip(keep.iter_mut()) {
			if is_high_res_wheel(event) {
				continue;
			}
			if let Some(held) = self.released_after_swallow(event) {
				self.held.remove(held);
				*keep = false;
				continue;
			}
			let Some(event_type) = event_type_of(event) else {
				continue;
			};
			*keep = filter(Event { event_type, time: SystemTime::now(), name: None }).is_some();
			match event.event_code {
				EventCode::EV_REL(EV_REL::REL_WHEEL) => self.wheel_swallowed = !*keep,
				EventCode::EV_KEY(_) if !*keep && event.value == 1 => {
					self.held.push(event_code_to_int(&event.event_code).1);
				}
				_ => {}
			}
		}
		for (event, keep) in frame.iter().zip(keep.iter_mut()) {
			if is_high_res_wheel(event) {
				*keep = !self.wheel_swallowed;
			}
		}
		if let Some(output) = &self.output {
			for (event, _) in frame.iter().zip(&keep).filter(|(_, keep)| **keep) {
				output.write_event(event)?;
			}
			output.write_event(report)?;
		}
		self.pending = frame;
		self.pending.clear();
		Ok(())
	}

	/// The index into `held` if `event` releases a button whose press was swallowed.
	fn released_after_swallow(&self, event: &InputEvent) -> Option<usize> {
		if !matches!(event.event_code, EventCode::EV_KEY(_)) || event.value != 0 {
			return None;
		}
		let code = event_code_to_int(&event.event_code).1;
		self.held.iter().position(|&held| held == code)
	}
}

fn is_high_res_wheel(event: &InputEvent) -> bool {
	event.event_code == EventCode::EV_REL(EV_REL::REL_WHEEL_HI_RES)
}

fn is_event_node(path: &Path) -> bool {
	path.file_name().and_then(OsStr::to_str).is_some_and(|name| name.starts_with("event"))
}

fn event_nodes() -> io::Result<impl Iterator<Item = PathBuf>> {
	Ok(fs::read_dir(DEV_INPUT)?
		.filter_map(Result::ok)
		.map(|entry| entry.path())
		.filter(|path| is_event_node(path)))
}

fn key_of(key: &EV_KEY) -> Key {
	match key {
		EV_KEY::KEY_1 => Key::Num1,
		EV_KEY::KEY_2 => Key::Num2,
		EV_KEY::KEY_3 => Key::Num3,
		EV_KEY::KEY_4 => Key::Num4,
		EV_KEY::KEY_5 => Key::Num5,
		EV_KEY::KEY_6 => Key::Num6,
		EV_KEY::KEY_7 => Key::Num7,
		EV_KEY::KEY_8 => Key::Num8,
		EV_KEY::KEY_9 => Key::Num9,
		EV_KEY::KEY_0 => Key::Num0,
		EV_KEY::KEY_E => Key::KeyE,
		EV_KEY::KEY_F => Key::KeyF,
		EV_KEY::KEY_CAPSLOCK => Key::CapsLock,
		other => Key::Unknown(event_code_to_int(&EventCode::EV_KEY(other.clone())).1),
	}
}

fn button_of(key: &EV_KEY) -> Option<Button> {
	match key {
		EV_KEY::BTN_LEFT => Some(Button::Left),
		EV_KEY::BTN_RIGHT => Some(Button::Right),
		EV_KEY::BTN_MIDDLE => Some(Button::Middle),
		EV_KEY::BTN_SIDE => Some(Button::Unknown(BUTTON_SIDE)),
		EV_KEY::BTN_EXTRA => Some(Button::Unknown(BUTTON_EXTRA)),
		_ => None,
	}
}

/// Translate an evdev event into the form the filter understands.
/// Motion, synchronisation and anything else the remapper never looks at yields [`None`], and is
/// passed through without consulting the filter.
pub(crate) fn event_type_of(event: &InputEvent) -> Option<EventType> {
	let pressed = event.value != 0;
	match &event.event_code {
		EventCode::EV_KEY(code) => match button_of(code) {
			Some(button) if pressed => Some(EventType::ButtonPress(button)),
			Some(button) => Some(EventType::ButtonRelease(button)),
			// from BTN_MISC up: other buttons and the extended key range
			None if event_code_to_int(&event.event_code).1 >= 0x100 => None,
			None if pressed => Some(EventType::KeyPress(key_of(code))),
			None => Some(EventType::KeyRelease(key_of(code))),
		},
		EventCode::EV_REL(EV_REL::REL_WHEEL) => {
			Some(EventType::Wheel { delta_x: 0, delta_y: event.value.into() })
		}
		EventCode::EV_REL(EV_REL::REL_HWHEEL) => {
			Some(EventType::Wheel { delta_x: event.value.into(), delta_y: 0 })
		}
		_ => None,
	}
}

/// Grab the pointing devices, watch the keyboards, and feed every event through `filter`.
/// Devices plugged in later are not picked up.
///
/// # Errors
///
/// [`CyclekeyError::Interceptor`] if `/dev/input` cannot be read, no pointing device could be
/// grabbed, or reading the devices fails.
pub fn grab<F>(filter: F) -> CyclekeyResult<()>
where
	F: Fn(Event) -> Option<Event> + 'static,
{
	run(&filter).map_err(|error| CyclekeyError::Interceptor(error.to_string()))
}

fn run<F>(filter: &F) -> io::Result<()>
where
	F: Fn(Event) -> Option<Event>,
{
	let mut sources = Vec::new();
	for path in event_nodes()? {
		match Source::open(&path) {
			Ok(Some(source)) => sources.push(source),
			Ok(None) => {}
			Err(error) => tracing::debug!(path = %path.display(), %error, "Skipping input device"),
		}
	}
	if !sources.iter().any(Source::is_grabbed) {
		return Err(io::Error::new(
			io::ErrorKind::NotFound,
			"no mouse with a wheel or side buttons could be grabbed",
		));
	}

	let epoll_fd = epoll::create(true)?;
	for (index, source) in (0u64..).zip(&sources) {
		epoll::ctl(epoll_fd, EPOLL_CTL_ADD, source.fd, epoll::Event::new(Events::EPOLLIN, index))?;
	}

	let mut ready = [epoll::Event::new(Events::empty(), 0); 8];
	loop {
		let count = match epoll::wait(epoll_fd, -1, &mut ready) {
			Ok(count) => count,
			Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
			Err(error) => return Err(error),
		};
		for ready_event in &ready[..count] {
			let index = ready_event.data;
			let Some(source) = usize::try_from(index).ok().and_then(|i| sources.get_mut(i)) else {
				continue;
			};
			if let Err(error) = source.drain(filter) {
				tracing::warn!(path = %source.path.display(), %error, "Input device went away");
				epoll::ctl(
					epoll_fd,
					EPOLL_CTL_DEL,
					source.fd,
					epoll::Event::new(Events::empty(), 0),
				)?;
			}
		}
	}
}

/// Read the Caps Lock LED of the first keyboard that has one.
#[must_use]
pub fn caps_lock_state() -> Option<bool> {
	event_nodes()
		.ok()?
		.filter_map(|path| File::open(path).ok())
		.filter_map(|file| Device::new_from_fd(file).ok())
		.find_map(|device| device.event_value(&EventCode::EV_LED(EV_LED::LED_CAPSL)))
		.map(|value| value != 0)
}
