use std::fmt;

/// Declares `FmodResult` from a table of `(variant, native value, description)`.
///
/// The native side returns a plain `int`, so the enum is never transmuted from
/// native memory: `from_raw` maps every value, keeping unknown ones in `Other`.
macro_rules! status_codes {
    ($($variant:ident = $value:literal => $text:literal,)+) => {
        /// Status code returned by every native entry point (`FMOD_RESULT`).
        ///
        /// Values follow the FMOD 1.x low-level header the studio API ships with.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FmodResult {
            $($variant,)+
            /// A status this binding does not know about, kept verbatim.
            Other(i32),
        }

        impl FmodResult {
            /// Decode a native status value.
            pub fn from_raw(raw: i32) -> Self {
                match raw {
                    $($value => Self::$variant,)+
                    other => Self::Other(other),
                }
            }

            /// The native status value.
            pub fn raw(self) -> i32 {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(other) => other,
                }
            }

            /// Human readable description of the status.
            pub fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(_) => "Unrecognised status code.",
                }
            }
        }
    };
}

status_codes! {
    Ok = 0 => "No errors.",
    AlreadyLocked = 1 => "Tried to call lock a second time before unlock was called.",
    BadCommand = 2 => "Tried to call a function on a data type that does not allow this type of functionality.",
    ChannelAlloc = 3 => "Error trying to allocate a channel.",
    ChannelStolen = 4 => "The specified channel has been reused to play another sound.",
    Dma = 5 => "DMA failure.",
    DspConnection = 6 => "DSP connection error. Connection possibly caused a cyclic dependency or connected dsps with incompatible buffer counts.",
    DspDontProcess = 7 => "DSP return code from a DSP process query callback. Tells mixer not to call the process callback.",
    DspFormat = 8 => "DSP format error. A DSP unit may have attempted to connect to this network with the wrong format.",
    DspInUse = 9 => "DSP is already in the mixer's DSP network.",
    DspNotFound = 10 => "DSP connection error. Couldn't find the DSP unit specified.",
    DspReserved = 11 => "DSP operation error. Cannot perform operation on this DSP as it is reserved by the system.",
    DspSilence = 12 => "DSP return code from a DSP process query callback. Tells mixer silence would be produced.",
    DspType = 13 => "DSP operation cannot be performed on a DSP of this type.",
    FileBad = 14 => "Error loading file.",
    FileCouldNotSeek = 15 => "Couldn't perform seek operation.",
    FileDiskEjected = 16 => "Media was ejected while reading.",
    FileEof = 17 => "End of file unexpectedly reached while trying to read essential data.",
    FileEndOfData = 18 => "End of current chunk reached while trying to read data.",
    FileNotFound = 19 => "File not found.",
    Format = 20 => "Unsupported file or audio format.",
    HeaderMismatch = 21 => "There is a version mismatch between the FMOD header and either the FMOD Studio library or the FMOD Low Level library.",
    Http = 22 => "A HTTP error occurred.",
    HttpAccess = 23 => "The specified resource requires authentication or is forbidden.",
    HttpProxyAuth = 24 => "Proxy authentication is required to access the specified resource.",
    HttpServerError = 25 => "A HTTP server error occurred.",
    HttpTimeout = 26 => "The HTTP request timed out.",
    Initialization = 27 => "FMOD was not initialized correctly to support this function.",
    Initialized = 28 => "Cannot call this command after System::init.",
    Internal = 29 => "An error occurred that wasn't supposed to.",
    InvalidFloat = 30 => "Value passed in was a NaN, Inf or denormalized float.",
    InvalidHandle = 31 => "An invalid object handle was used.",
    InvalidParam = 32 => "An invalid parameter was passed to this function.",
    InvalidPosition = 33 => "An invalid seek position was passed to this function.",
    InvalidSpeaker = 34 => "An invalid speaker was passed to this function based on the current speaker mode.",
    InvalidSyncPoint = 35 => "The syncpoint did not come from this sound handle.",
    InvalidThread = 36 => "Tried to call a function on a thread that is not supported.",
    InvalidVector = 37 => "The vectors passed in are not unit length, or perpendicular.",
    MaxAudible = 38 => "Reached maximum audible playback count for this sound's soundgroup.",
    Memory = 39 => "Not enough memory or resources.",
    MemoryCantPoint = 40 => "Can't use FMOD_OPENMEMORY_POINT on non PCM source data, or non mp3/xma/adpcm data if FMOD_CREATECOMPRESSEDSAMPLE was used.",
    Needs3d = 41 => "Tried to call a command on a 2d sound when the command was meant for 3d sound.",
    NeedsHardware = 42 => "Tried to use a feature that requires hardware support.",
    NetConnect = 43 => "Couldn't connect to the specified host.",
    NetSocketError = 44 => "A socket error occurred.",
    NetUrl = 45 => "The specified URL couldn't be resolved.",
    NetWouldBlock = 46 => "Operation on a non-blocking socket could not complete immediately.",
    NotReady = 47 => "Operation could not be performed because specified sound/DSP connection is not ready.",
    OutputAllocated = 48 => "Error initializing output device, but more specifically, the output device is already in use and cannot be reused.",
    OutputCreateBuffer = 49 => "Error creating hardware sound buffer.",
    OutputDriverCall = 50 => "A call to a standard soundcard driver failed, which could possibly mean a bug in the driver or resources were missing or exhausted.",
    OutputFormat = 51 => "Soundcard does not support the specified format.",
    OutputInit = 52 => "Error initializing output device.",
    OutputNoDrivers = 53 => "The output device has no drivers installed.",
    Plugin = 54 => "An unspecified error has been returned from a plugin.",
    PluginMissing = 55 => "A requested output, dsp unit type or codec was not available.",
    PluginResource = 56 => "A resource that the plugin requires cannot be found.",
    PluginVersion = 57 => "A plugin was built with an unsupported SDK version.",
    Record = 58 => "An error occurred trying to initialize the recording device.",
    ReverbChannelGroup = 59 => "Reverb properties cannot be set on this channel because a parent channelgroup owns the reverb connection.",
    ReverbInstance = 60 => "Specified instance in FMOD_REVERB_PROPERTIES couldn't be set.",
    Subsounds = 61 => "The error occurred because the sound referenced contains subsounds when it shouldn't have, or it doesn't contain subsounds when it should have.",
    SubsoundAllocated = 62 => "This subsound is already being used by another sound.",
    SubsoundCantMove = 63 => "Shared subsounds cannot be replaced or moved from their parent stream.",
    TagNotFound = 64 => "The specified tag could not be found or there are no tags.",
    TooManyChannels = 65 => "The sound created exceeds the allowable input channel count.",
    Truncated = 66 => "The retrieved string is too long to fit in the supplied buffer and has been truncated.",
    Unimplemented = 67 => "Something in FMOD hasn't been implemented when it should be.",
    Uninitialized = 68 => "This command failed because System::init or System::setDriver was not called.",
    Unsupported = 69 => "A command issued was not supported by this object.",
    Version = 70 => "The version number of this file format is not supported.",
    EventAlreadyLoaded = 71 => "The specified bank has already been loaded.",
    EventLiveUpdateBusy = 72 => "The live update connection failed due to the game already being connected.",
    EventLiveUpdateMismatch = 73 => "The live update connection failed due to the game data being out of sync with the tool.",
    EventLiveUpdateTimeout = 74 => "The live update connection timed out.",
    EventNotFound = 75 => "The requested event, bus or vca could not be found.",
    StudioUninitialized = 76 => "The Studio::System object is not yet initialized.",
    StudioNotLoaded = 77 => "The specified resource is not loaded, so it can't be unloaded.",
    InvalidString = 78 => "An invalid string was passed to this function.",
    AlreadyLockedStudio = 79 => "The specified resource is already locked.",
    NotLocked = 80 => "The specified resource is not locked, so it can't be unlocked.",
}

impl FmodResult {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<i32> for FmodResult {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for FmodResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}, {})", self.description(), self, self.raw())
    }
}
