#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::{Delay, Timer};
use rotary_counter_logic::{CURRENT_ID, CounterCell};
use rp_rotary_counter::{DISPATCH, RpEdgeInterrupts, RpEncoder, spawn_clock_line};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

const COARSE: u8 = 1;
const FINE: u8 = 2;

static EXECUTOR_EDGES: InterruptExecutor = InterruptExecutor::new();
static COUNTERS: StaticCell<[CounterCell; 2]> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { EXECUTOR_EDGES.on_interrupt() }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Edges must preempt the polling loop below.
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let edges = EXECUTOR_EDGES.start(interrupt::SWI_IRQ_1);
    let clock_pin = unwrap!(spawn_clock_line(edges, p.PIN_2));

    let storage = COUNTERS.init([const { CounterCell::new() }; 2]);
    let mut encoder: RpEncoder<Delay> = RpEncoder::new(
        RpEdgeInterrupts,
        &DISPATCH,
        clock_pin,
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Delay,
        storage,
    );
    if !encoder.add_counter(COARSE, 0, 0, 10, 1, true) {
        error!("coarse counter rejected");
    }
    if !encoder.add_counter(FINE, 0, 0, 5, 1, false) {
        error!("fine counter rejected");
    }

    loop {
        if encoder.switch_pressed() {
            let next = if encoder.is_active(COARSE) { FINE } else { COARSE };
            encoder.select_counter(next);
            info!("selected counter {}", next);
        }
        if encoder.has_changed(CURRENT_ID) {
            info!(
                "counter {} = {}",
                encoder.current_id(),
                encoder.get_value(CURRENT_ID)
            );
        }
        Timer::after_millis(10).await;
    }
}
