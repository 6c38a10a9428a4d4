//! Line-oriented command dispatcher.
//!
//! The first word of a line selects the handler:
//!
//! | First word                              | Handler          |
//! |-----------------------------------------|------------------|
//! | `exit`                                  | end the session  |
//! | `default` `size` `zoom` `pan` `show`    | chart view       |
//! | `status` `go` `create`                  | world            |
//! | the name of a vessel                    | that vessel      |
//!
//! Anything else is an illegal command.  A rejected command changes nothing.

use std::io::{self, BufRead, Write};
use std::str::SplitWhitespace;

use sn_core::Point;
use sn_fleet::VesselClass;
use sn_loader::{parse_point, take_point};
use sn_sim::{SimError, SimObserver, World};
use sn_view::{MapView, ViewError};
use tracing::debug;

use crate::{CommandError, CommandResult};

/// Whether the session should keep reading commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the world and the chart view for one interactive session.
///
/// `go` advances the world through `observer`, so a trace writer can be
/// attached for the whole session.
pub struct Controller<O: SimObserver> {
    world:    World,
    view:     MapView,
    observer: O,
}

impl<O: SimObserver> Controller<O> {
    pub fn new(world: World, observer: O) -> Self {
        Self { world, view: MapView::default(), observer }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Prompt, read and execute commands until `exit` or end of input.
    ///
    /// Command output goes to `out`; rejected commands are reported on `err`
    /// as `Error: <reason>`.
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "Time {}: Enter command: ", self.world.time())?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            match self.execute(&line, out) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    debug!(command = %line.trim(), error = %e, "command rejected");
                    writeln!(err, "Error: {e}")?;
                }
            }
        }
        Ok(())
    }

    /// Execute one command line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> CommandResult<Flow> {
        let mut args = line.split_whitespace();
        let Some(first) = args.next() else {
            return Ok(Flow::Continue);
        };

        match first {
            "exit" => return Ok(Flow::Exit),
            "default" | "size" | "zoom" | "pan" | "show" => self.view_command(first, &mut args, out)?,
            "status" | "go" | "create" => self.world_command(first, &mut args, out)?,
            name if self.world.vessel_exists(name) => self.vessel_command(name, &mut args)?,
            _ => return Err(CommandError::Illegal),
        }
        Ok(Flow::Continue)
    }

    // ── Chart view ────────────────────────────────────────────────────────

    fn view_command<W: Write>(
        &mut self,
        cmd:  &str,
        args: &mut SplitWhitespace<'_>,
        out:  &mut W,
    ) -> CommandResult<()> {
        match cmd {
            "default" => self.view.set_default(),
            "show" => {
                let chart = self.view.render(&self.world.all_entities());
                out.write_all(chart.as_bytes())?;
            }
            "size" => {
                let tok = args
                    .next()
                    .ok_or_else(|| CommandError::usage("size requires an integer argument"))?;
                let n: i64 = tok.parse().map_err(|_| CommandError::usage("expected an integer"))?;
                let n = usize::try_from(n).map_err(|_| ViewError::SizeTooSmall)?;
                self.view.set_size(n)?;
            }
            "zoom" => {
                let tok = args
                    .next()
                    .ok_or_else(|| CommandError::usage("zoom requires a numeric argument"))?;
                let scale = parse_real(tok).ok_or_else(|| CommandError::usage("expected a double"))?;
                self.view.set_scale(scale)?;
            }
            "pan" => {
                let (Some(x), Some(y)) = (args.next().and_then(parse_real), args.next().and_then(parse_real))
                else {
                    return Err(CommandError::usage("pan requires two numeric arguments"));
                };
                self.view.set_origin(Point::new(x, y));
            }
            _ => return Err(CommandError::Illegal),
        }
        Ok(())
    }

    // ── World ─────────────────────────────────────────────────────────────

    fn world_command<W: Write>(
        &mut self,
        cmd:  &str,
        args: &mut SplitWhitespace<'_>,
        out:  &mut W,
    ) -> CommandResult<()> {
        match cmd {
            "status" => Ok(self.world.print_status(out)?),
            "go" => {
                self.world.advance_with(&mut self.observer);
                Ok(())
            }
            "create" => self.create(args),
            _ => Err(CommandError::Illegal),
        }
    }

    /// `create <name> <kind> (<x>, <y>) <stat> [<extra>]`
    fn create(&mut self, args: &mut SplitWhitespace<'_>) -> CommandResult<()> {
        let name = args.next().ok_or_else(|| CommandError::usage("create requires a name"))?;
        let max = self.world.config().max_name_len;
        if name.chars().count() > max {
            return Err(CommandError::usage(format!("ship name too long (max {max} chars)")));
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CommandError::usage("ship name must be alphabetic"));
        }
        if self.world.name_exists(name) {
            return Err(SimError::NameConflict(name.to_owned()).into());
        }

        let kind = args.next().ok_or_else(|| CommandError::usage("create requires a ship type"))?;
        let class = VesselClass::from_token(kind)
            .ok_or_else(|| CommandError::usage(format!("unknown ship type '{kind}'")))?;

        let coords = take_point(args).ok_or_else(|| CommandError::usage("create requires coordinates"))?;
        let at = parse_point(&coords).ok_or_else(|| CommandError::usage("invalid coordinates"))?;

        let stat: i32 = args
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| CommandError::usage("create requires a resistance/force value"))?;
        let extra: u32 = match args.next() {
            Some(tok) => tok
                .parse()
                .map_err(|_| CommandError::usage(format!("expected a non-negative integer, got '{tok}'")))?,
            None => 0,
        };

        match class {
            VesselClass::Freighter => self.world.add_freighter(name, at, stat, extra)?,
            VesselClass::PatrolBoat => self.world.add_patrol(name, at, stat)?,
            VesselClass::Cruiser => self.world.add_cruiser(name, at, stat, extra)?,
        };
        Ok(())
    }

    // ── Vessels ───────────────────────────────────────────────────────────

    fn vessel_command(&mut self, name: &str, args: &mut SplitWhitespace<'_>) -> CommandResult<()> {
        let sub = args
            .next()
            .ok_or_else(|| CommandError::usage(format!("missing command for ship '{name}'")))?;

        match sub {
            "stop" => self.world.stop(name)?,
            "refuel" => {
                self.world.refuel_docked(name)?;
            }
            "course" => {
                let (Some(heading), Some(speed)) =
                    (args.next().and_then(parse_real), args.next().and_then(parse_real))
                else {
                    return Err(CommandError::usage("course requires heading and speed"));
                };
                self.world.set_course(name, heading, speed)?;
            }
            "position" => {
                let coords =
                    take_point(args).ok_or_else(|| CommandError::usage("position requires coordinates"))?;
                let at = parse_point(&coords).ok_or_else(|| CommandError::usage("invalid coordinates"))?;
                let speed = args
                    .next()
                    .and_then(parse_real)
                    .ok_or_else(|| CommandError::usage("position requires speed"))?;
                self.world.set_destination(name, at, speed)?;
            }
            "destination" => {
                let (Some(port), Some(speed)) = (args.next(), args.next().and_then(parse_real)) else {
                    return Err(CommandError::usage("destination requires port name and speed"));
                };
                self.world.set_port_destination(name, port, speed)?;
            }
            "load_at" => {
                let port = args
                    .next()
                    .ok_or_else(|| CommandError::usage("load_at requires a port name"))?;
                self.world.load_at(name, port)?;
            }
            "unload_at" => {
                let (Some(port), Some(count)) = (args.next(), args.next().and_then(|t| t.parse().ok()))
                else {
                    return Err(CommandError::usage("unload_at requires port name and container count"));
                };
                self.world.unload_at(name, port, count)?;
            }
            "dock_at" => {
                let port = args
                    .next()
                    .ok_or_else(|| CommandError::usage("dock_at requires a port name"))?;
                self.world.dock_at(name, port)?;
            }
            "attack" => {
                let target = args
                    .next()
                    .ok_or_else(|| CommandError::usage("attack requires a target ship name"))?;
                self.world.attack(name, target)?;
            }
            other => {
                return Err(CommandError::usage(format!("illegal command '{other}' for ship '{name}'")));
            }
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A finite real number, or `None`.
fn parse_real(tok: &str) -> Option<f64> {
    tok.parse::<f64>().ok().filter(|v| v.is_finite())
}
