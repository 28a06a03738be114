use bootloader_api::BootInfo;
use x86_64::instructions::{hlt, interrupts};

use crate::{
    drivers::ps2_keyboard::KeyboardPipeline,
    framebuffer::{surface_from_boot_info, Font, Surface, FONT_DATA},
    interrupts::{descriptor_table, install_session, X86Platform},
    kernel::InitError,
    serial, serial_println,
    terminal::Terminal,
    ui::Theme,
};

const BOOT_PHASES: usize = 4;

/// Bring the kernel up and park. Never returns; a failed phase ends in
/// [`fatal`].
pub fn boot(boot_info: &'static mut BootInfo) -> ! {
    serial::init();

    serial_println!("╔════════════════════════════════════════╗");
    serial_println!("║       CONIX Kernel Initialization      ║");
    serial_println!("╚════════════════════════════════════════╝\n");

    if let Err(err) = bring_up(boot_info) {
        fatal(err);
    }

    serial_println!("✅ Kernel initialization complete, waiting for input\n");
    halt()
}

fn bring_up(boot_info: &'static mut BootInfo) -> Result<(), InitError> {
    let surface = init_phase(1, "Display System", move || surface_from_boot_info(boot_info))?;
    serial_println!(
        "    {}x{} pixels, pitch {} bytes",
        surface.width(),
        surface.height(),
        surface.pitch()
    );

    let terminal = init_terminal(surface, FONT_DATA, Theme::default())?;
    // must be in place before IRQ1 is unmasked
    install_session(terminal);

    init_phase(4, "Interrupt System", || {
        KeyboardPipeline::new(X86Platform::new()).init(descriptor_table())
    })
}

/// Font and Terminal phases: parse `font_data`, take over `surface` and
/// print the greeting and first prompt. The surface is not touched unless
/// the font is valid.
pub fn init_terminal<'a>(
    surface: Surface<'a>,
    font_data: &'a [u8],
    theme: Theme,
) -> Result<Terminal<'a>, InitError> {
    let font = init_phase(2, "Font", || Font::parse(font_data).map_err(InitError::from))?;

    let mut terminal = init_phase(3, "Terminal", || Terminal::new(surface, font, theme))?;
    terminal.start_session();
    serial_println!(
        "    {} columns x {} rows",
        terminal.max_cols(),
        terminal.max_rows()
    );
    Ok(terminal)
}

/// Run one boot phase, logging its progress and outcome.
pub fn init_phase<T>(
    step: usize,
    name: &'static str,
    init_fn: impl FnOnce() -> Result<T, InitError>,
) -> Result<T, InitError> {
    serial_println!("[{}/{}] Initializing {}...", step, BOOT_PHASES, name);

    match init_fn() {
        Ok(value) => {
            serial_println!("    ✓ {} initialized successfully", name);
            Ok(value)
        }
        Err(e) => {
            serial_println!("    ✗ {} failed: {}", name, e);
            Err(e)
        }
    }
}

/// Idle forever. Interrupts, if enabled, still run between `hlt`s.
pub fn halt() -> ! {
    loop {
        hlt();
    }
}

/// Log `err` and stop the CPU for good.
pub fn fatal(err: InitError) -> ! {
    serial_println!("Kernel initialization failed: {}", err);
    interrupts::disable();
    halt()
}
