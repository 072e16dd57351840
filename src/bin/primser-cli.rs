use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use primser::{
    DateTimeKind, PrimitiveSerializer, Serializer, SerializerConfig, TimeSpan, Timestamp, Uuid,
};

#[derive(clap::Parser, Debug)]
#[command(name = "primser-cli", version, about = "Encode and decode single primitive values")]
struct Cli {
    /// Reject the legacy edge cases (unchecked EOF bytes, ragged arrays, ...)
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// encode <type> <value>: print the wire bytes as hex
    Encode {
        #[arg(value_enum)]
        ty: Kind,
        value: String,
    },
    /// decode <type> <hex>: print the value and how many bytes it consumed
    Decode {
        #[arg(value_enum)]
        ty: Kind,
        wire: String,
    },
    /// len <type> <value>: print the encoded size in bytes
    Len {
        #[arg(value_enum)]
        ty: Kind,
        value: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    Usize,
    Isize,
    Char,
    F32,
    F64,
    Guid,
    /// signed 100 ns ticks
    Timespan,
    /// RFC 3339, stored as a UTC timestamp
    Timestamp,
    String,
    /// hex payload
    Bytes,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = if cli.strict {
        SerializerConfig::strict()
    } else {
        SerializerConfig::compat()
    };
    let ser = PrimitiveSerializer::with_config(cfg);

    match cli.cmd {
        Cmd::Encode { ty, value } => {
            let wire = encode(&ser, ty, &value)?;
            println!("{}", hex::encode(wire));
        }
        Cmd::Decode { ty, wire } => {
            let wire = hex::decode(wire.trim())?;
            let (text, used) = decode(&ser, ty, &wire)?;
            println!("{text}");
            if used != wire.len() {
                eprintln!("consumed {used} of {} bytes", wire.len());
            } else {
                eprintln!("consumed {used} bytes");
            }
        }
        Cmd::Len { ty, value } => {
            println!("{}", encode(&ser, ty, &value)?.len());
        }
    }
    Ok(())
}

fn to_vec<T>(ser: &PrimitiveSerializer, v: T) -> CliResult<Vec<u8>>
where
    PrimitiveSerializer: Serializer<T>,
{
    Ok(ser.to_vec(&v)?)
}

fn encode(ser: &PrimitiveSerializer, ty: Kind, s: &str) -> CliResult<Vec<u8>> {
    match ty {
        Kind::Bool => to_vec(ser, s.parse::<bool>()?),
        Kind::U8 => to_vec(ser, s.parse::<u8>()?),
        Kind::I8 => to_vec(ser, s.parse::<i8>()?),
        Kind::U16 => to_vec(ser, s.parse::<u16>()?),
        Kind::I16 => to_vec(ser, s.parse::<i16>()?),
        Kind::U32 => to_vec(ser, s.parse::<u32>()?),
        Kind::I32 => to_vec(ser, s.parse::<i32>()?),
        Kind::U64 => to_vec(ser, s.parse::<u64>()?),
        Kind::I64 => to_vec(ser, s.parse::<i64>()?),
        Kind::Usize => to_vec(ser, s.parse::<usize>()?),
        Kind::Isize => to_vec(ser, s.parse::<isize>()?),
        Kind::Char => to_vec(ser, s.parse::<char>()?),
        Kind::F32 => to_vec(ser, s.parse::<f32>()?),
        Kind::F64 => to_vec(ser, s.parse::<f64>()?),
        Kind::Guid => to_vec(ser, Uuid::parse_str(s)?),
        Kind::Timespan => to_vec(ser, TimeSpan::from_ticks(s.parse::<i64>()?)),
        Kind::Timestamp => {
            let dt = chrono::DateTime::parse_from_rfc3339(s)?.to_utc();
            let ts = Timestamp::from_utc(dt).ok_or("timestamp before year 1")?;
            to_vec(ser, ts)
        }
        Kind::String => to_vec(ser, s.to_string()),
        Kind::Bytes => to_vec(ser, hex::decode(s)?),
    }
}

/// Decode one value from the front of `wire`; returns its text and byte count.
fn decode(ser: &PrimitiveSerializer, ty: Kind, wire: &[u8]) -> CliResult<(String, usize)> {
    fn one<T>(ser: &PrimitiveSerializer, wire: &[u8], show: impl Fn(T) -> String) -> CliResult<(String, usize)>
    where
        PrimitiveSerializer: Serializer<T>,
    {
        let mut r = wire;
        let v = <PrimitiveSerializer as Serializer<T>>::decode_from(ser, &mut r)?;
        Ok((show(v), wire.len() - r.len()))
    }

    match ty {
        Kind::Bool => one(ser, wire, |v: bool| v.to_string()),
        Kind::U8 => one(ser, wire, |v: u8| v.to_string()),
        Kind::I8 => one(ser, wire, |v: i8| v.to_string()),
        Kind::U16 => one(ser, wire, |v: u16| v.to_string()),
        Kind::I16 => one(ser, wire, |v: i16| v.to_string()),
        Kind::U32 => one(ser, wire, |v: u32| v.to_string()),
        Kind::I32 => one(ser, wire, |v: i32| v.to_string()),
        Kind::U64 => one(ser, wire, |v: u64| v.to_string()),
        Kind::I64 => one(ser, wire, |v: i64| v.to_string()),
        Kind::Usize => one(ser, wire, |v: usize| v.to_string()),
        Kind::Isize => one(ser, wire, |v: isize| v.to_string()),
        Kind::Char => one(ser, wire, |v: char| format!("{v:?}")),
        Kind::F32 => one(ser, wire, |v: f32| v.to_string()),
        Kind::F64 => one(ser, wire, |v: f64| v.to_string()),
        Kind::Guid => one(ser, wire, |v: Uuid| v.hyphenated().to_string()),
        Kind::Timespan => one(ser, wire, |v: TimeSpan| format!("{} ticks", v.ticks())),
        Kind::Timestamp => one(ser, wire, |v: Timestamp| match v.kind() {
            DateTimeKind::Utc => v.to_naive().and_utc().to_rfc3339(),
            kind => format!("{} ({kind:?})", v.to_naive()),
        }),
        Kind::String => one(ser, wire, |v: Option<String>| match v {
            Some(s) => format!("{s:?}"),
            None => "null".to_string(),
        }),
        Kind::Bytes => one(ser, wire, |v: Option<Vec<u8>>| match v {
            Some(b) => hex::encode(b),
            None => "null".to_string(),
        }),
    }
}
