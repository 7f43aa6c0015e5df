use clap::{arg,crate_version,ArgMatches,Command};
use huffcode::{huffman,report,Error,STD_OPTIONS};
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

const RCH: &str = "unreachable was reached";
const EMPTY_MSG: &str = "Input Data Is Empty! Try Again with a File that has data inside!";

/// Load the symbols to code, by default only the first line of the file.
fn load_data(cmd: &ArgMatches) -> Result<String,Box<dyn std::error::Error>> {
    let path_in = cmd.get_one::<String>("input").expect(RCH);
    let txt = std::fs::read_to_string(path_in)?;
    if cmd.get_flag("all") {
        return Ok(txt);
    }
    Ok(txt.lines().next().unwrap_or("").to_string())
}

/// Run the encoder, `None` means the input was empty and the diagnostic was printed.
fn encode_data(txt: &str) -> Result<Option<huffman::Encoding<char>>,Box<dyn std::error::Error>> {
    let symbols: Vec<char> = txt.chars().collect();
    match huffman::compress(&symbols,&STD_OPTIONS) {
        Ok(enc) => Ok(Some(enc)),
        Err(Error::EmptyInput) => {
            eprintln!("{}",EMPTY_MSG);
            Ok(None)
        },
        Err(e) => Err(Box::new(e))
    }
}

fn main() -> STDRESULT
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let long_help =
"Examples:
---------
Report:        `huffcode report -i input1.txt`
Encode:        `huffcode encode -i input1.txt -o input1.bits`
Code table:    `huffcode codes -i input1.txt --all`";

    let mut main_cmd = Command::new("huffcode")
        .about("Huffman coding of text with a savings report")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("report")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(--all "use the whole file rather than the first line"))
        .about("print frequencies, codes, and space savings"));

    main_cmd = main_cmd.subcommand(Command::new("encode")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path, default is stdout"))
        .arg(arg!(--all "use the whole file rather than the first line"))
        .about("write the encoded bits as 0 and 1 characters"));

    main_cmd = main_cmd.subcommand(Command::new("codes")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(--all "use the whole file rather than the first line"))
        .about("print the code table"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("report") {
        let txt = load_data(cmd)?;
        let enc = match encode_data(&txt)? {
            Some(enc) => enc,
            None => return Ok(())
        };
        let decoded = huffman::decode(&enc.stream,&enc.table)?;
        let original: Vec<char> = txt.chars().collect();
        let stats = report::Stats::new(txt.len(),enc.stream.len());
        report::write_report(&mut std::io::stdout(),&original,&enc,&decoded,&stats)?;
    }

    if let Some(cmd) = matches.subcommand_matches("encode") {
        let txt = load_data(cmd)?;
        let enc = match encode_data(&txt)? {
            Some(enc) => enc,
            None => return Ok(())
        };
        match cmd.get_one::<String>("output") {
            Some(path_out) => {
                std::fs::write(path_out,&enc.stream)?;
                eprintln!("encoded {} symbols into {} bits",txt.chars().count(),enc.stream.len());
            },
            None => println!("{}",enc.stream)
        }
    }

    if let Some(cmd) = matches.subcommand_matches("codes") {
        let txt = load_data(cmd)?;
        let enc = match encode_data(&txt)? {
            Some(enc) => enc,
            None => return Ok(())
        };
        for (sym,code) in enc.table.iter() {
            println!("{:?}\t{}",sym,code);
        }
    }

    Ok(())
}
